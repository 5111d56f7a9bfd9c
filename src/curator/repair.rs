//! Textual repairs applied to completion output before strict parsing.
//!
//! Each step is a no-op on well-formed JSON. All scanners track string
//! literals so brackets and commas inside track names are left alone.

/// Removes markdown fences and surrounding prose.
///
/// Returns the span from the first `{` to the last `}`. When the text was cut
/// off before any closing brace, the span runs to the end of the text so
/// [`balance`] can close it. Returns `None` if there is no `{` at all.
///
/// The fenced block is preferred; if it holds no object (a lone closing
/// fence after the JSON, for instance) the whole text is searched instead.
pub fn strip_wrapper(text: &str) -> Option<&str> {
    let text = text.trim();
    let body = fenced_block(text)
        .filter(|block| block.contains('{'))
        .unwrap_or(text);

    let start = body.find('{')?;
    let body = &body[start..];

    match body.rfind('}') {
        Some(end) => Some(&body[..=end]),
        None => Some(body),
    }
}

fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let body = &text[start + 3..];
    match body.find("```") {
        Some(end) => Some(&body[..end]),
        None => Some(body),
    }
}

/// Appends the closers missing at the end of `json`, innermost first.
///
/// An unterminated string literal is closed before any bracket. Stray closers
/// that do not match the open bracket are kept as they are.
pub fn balance(json: &str) -> String {
    let mut open: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in json.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => open.push('}'),
            '[' => open.push(']'),
            '}' | ']' => {
                if open.last() == Some(&c) {
                    open.pop();
                }
            }
            _ => {}
        }
    }

    let mut out = json.to_string();
    if in_string {
        if escaped {
            out.pop();
        }
        out.push('"');
    }
    while let Some(closer) = open.pop() {
        out.push(closer);
    }
    out
}

/// Drops commas that directly precede a closing `}` or `]`.
pub fn strip_trailing_commas(json: &str) -> String {
    let chars: Vec<char> = json.chars().collect();
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
            continue;
        }

        if c == ',' {
            let next = chars[i + 1..].iter().find(|n| !n.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                continue;
            }
        }

        if c == '"' {
            in_string = true;
        }
        out.push(c);
    }

    out
}

/// Balance repair followed by syntax repair.
pub fn repair(json: &str) -> String {
    strip_trailing_commas(&balance(json))
}
