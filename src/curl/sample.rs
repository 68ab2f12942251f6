use super::descriptor::RequestDescriptor;

pub const NOT_CURL_SNIPPET: &str = "/* Not a curl command */";

const RESPONSE_HANDLING: &str = "  .then(res => {
    const ct = res.headers.get('content-type') || '';
    return ct.includes('application/json') ? res.json() : res.text();
  })
  .then(console.log)
  .catch(console.error);";

/// A fetch call performing the same request, reading the response as JSON or
/// text depending on its content type.
pub fn render_fetch_code(descriptor: &RequestDescriptor) -> String {
    // Strings and string maps always serialize.
    let url = serde_json::to_string(&descriptor.url).unwrap_or_default();
    let options = serde_json::to_string_pretty(&descriptor.options).unwrap_or_default();
    format!("fetch({url}, {options})\n{RESPONSE_HANDLING}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::descriptor::{Credentials, RequestOptions};

    #[test]
    fn test_render_fetch_code() {
        let mut options = RequestOptions::default();
        options.headers.insert("Cookie".into(), "a=1".into());
        options.credentials = Some(Credentials::Include);
        let descriptor = RequestDescriptor {
            url: "https://x.com/\"q\"".into(),
            options,
        };

        let expected = r#"fetch("https://x.com/\"q\"", {
  "method": "GET",
  "headers": {
    "Cookie": "a=1"
  },
  "credentials": "include"
})
  .then(res => {
    const ct = res.headers.get('content-type') || '';
    return ct.includes('application/json') ? res.json() : res.text();
  })
  .then(console.log)
  .catch(console.error);"#;
        assert_eq!(render_fetch_code(&descriptor), expected);
    }
}
