//! Static server-rendered pages.
//!
//! Templating is deliberately out of scope; these are plain HTML constants.

pub const INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>Phone Verification</title></head>
<body>
  <h1>Phone Verification</h1>
  <form action="/request" method="post">
    <label for="phone">Phone number</label>
    <input type="text" id="phone" name="phone" placeholder="(555) 123-4567">
    <button type="submit">Send token</button>
  </form>
</body>
</html>
"#;

pub const VERIFY: &str = r#"<!DOCTYPE html>
<html>
<head><title>Enter Token</title></head>
<body>
  <h1>Enter Token</h1>
  <form action="/verify" method="post">
    <label for="token">Token</label>
    <input type="text" id="token" name="token">
    <button type="submit">Verify</button>
  </form>
</body>
</html>
"#;

pub const VERIFY_ERROR: &str = r#"<!DOCTYPE html>
<html>
<head><title>Enter Token</title></head>
<body>
  <h1>Enter Token</h1>
  <p>Invalid token. Please try again.</p>
  <form action="/verify" method="post">
    <label for="token">Token</label>
    <input type="text" id="token" name="token">
    <button type="submit">Verify</button>
  </form>
</body>
</html>
"#;

pub const VERIFY_SUCCESS: &str = r#"<!DOCTYPE html>
<html>
<head><title>Verified</title></head>
<body>
  <h1>Verified</h1>
  <p>Your phone number has been verified.</p>
</body>
</html>
"#;
