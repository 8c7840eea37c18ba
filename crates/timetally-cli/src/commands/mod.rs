pub mod calc;
pub mod format;
pub mod template;

use std::io::Read;

/// Positional text argument, or the whole of stdin when omitted.
pub(crate) fn read_text(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
