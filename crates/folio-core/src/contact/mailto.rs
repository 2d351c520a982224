//! Mailto URL composition

/// Percent-encode a mailto query component
///
/// Keeps RFC 3986 unreserved characters; everything else, including
/// spaces and newlines, is escaped byte-wise.
pub fn percent_encode(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

/// Compose the mailto URL for a contact submission
pub fn mailto_url(to: &str, name: &str, email: &str, message: &str) -> String {
    let subject = format!("Portfolio Contact from {name}");
    let body = format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}\n");
    format!(
        "mailto:{to}?subject={}&body={}",
        percent_encode(&subject),
        percent_encode(&body)
    )
}
