//! Small shared helpers: URL encoding, number formatting, and URL opening.

/// Percent-encode a string for use inside a URL query component.
///
/// Unreserved characters pass through unchanged, spaces become `%20`, and
/// everything else is hex-escaped byte by byte.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(b));
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}

/// Format an integer with thousands separators, e.g. `1234567` → `"1,234,567"`.
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Derive a friendly domain label from a URL: scheme, credentials, port, path
/// and a leading `www.` are all stripped.
///
/// Falls back to the input unchanged when it does not look like a URL.
#[must_use]
pub fn host_label(url: &str) -> String {
    let rest = url
        .split_once("://")
        .map_or(url, |(_, r)| r);
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(rest);
    let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
    let host = host.split(':').next().unwrap_or(host);
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        url.to_string()
    } else {
        host.to_string()
    }
}

/// Open a URL in the default browser without blocking the caller.
///
/// - On Windows, uses `cmd /c start`, with fallback to `PowerShell` `Start-Process`.
/// - On Unix-like systems, uses `xdg-open` (Linux) or `open` (macOS).
/// - Spawns the command in a background thread and ignores errors.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("powershell")
                            .args(["-Command", &format!("Start-Process '{url}'")])
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
            }
            #[cfg(not(target_os = "windows"))]
            {
                let _ = std::process::Command::new("xdg-open")
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("open")
                            .arg(&url)
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
            }
        });
    }
}
