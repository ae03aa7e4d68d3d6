//! The fixed Go runtime every generated client embeds.
//!
//! `call` is the only place that talks to the network: it posts
//! `{"params": [...]}` to `BaseURL + functionName` and decodes
//! `{"result": ..., "error": ...}` into the caller's result slots.

/// Standard library packages imported by every generated file.
pub const STD_IMPORTS: [&str; 5] = ["bytes", "context", "encoding/json", "net/http", "time"];
/// Third-party packages imported by every generated file, grouped after the standard library.
pub const THIRD_PARTY_IMPORTS: [&str; 1] = ["github.com/mjl-/sherpa"];

const CLIENT_TYPE: &str = r#"var _ time.Time // in case "timestamp" is used

// Client calls the API over HTTP. BaseURL must end with a slash.
type Client struct {
	BaseURL string
	Client  *http.Client
}
"#;

const CALL_PRIMITIVE: &str = r#"func (c *Client) call(ctx context.Context, functionName string, params []interface{}, result []interface{}) error {
	sherpaReq := map[string]interface{}{
		"params": params,
	}
	buf := &bytes.Buffer{}
	err := json.NewEncoder(buf).Encode(sherpaReq)
	if err != nil {
		return &sherpa.Error{Code: "sherpa:parameter encode error", Message: "encoding request parameters: " + err.Error()}
	}

	url := c.BaseURL + functionName
	req, err := http.NewRequestWithContext(ctx, "POST", url, buf)
	if err != nil {
		return &sherpa.Error{Code: sherpa.SherpaHTTPError, Message: "constructing request: " + err.Error()}
	}
	req.Header.Set("Content-Type", "application/json; charset=utf-8")

	resp, err := c.Client.Do(req)
	if err != nil {
		return &sherpa.Error{Code: sherpa.SherpaHTTPError, Message: "sending POST request: " + err.Error()}
	}
	defer resp.Body.Close()

	switch resp.StatusCode {
	case 200:
		var response struct {
			Result json.RawMessage `json:"result"`
			Error  *sherpa.Error   `json:"error"`
		}
		err = json.NewDecoder(resp.Body).Decode(&response)
		if err != nil {
			return &sherpa.Error{Code: sherpa.SherpaBadResponse, Message: "parsing response: " + err.Error()}
		}
		if response.Error != nil {
			return response.Error
		}

		var r interface{} = &result
		if len(result) == 1 {
			r = &result[0]
		}
		err = json.Unmarshal(response.Result, r)
		if err != nil {
			return &sherpa.Error{Code: sherpa.SherpaBadResponse, Message: "parsing result: " + err.Error()}
		}
		return nil
	case 404:
		return &sherpa.Error{Code: sherpa.SherpaBadFunction, Message: "no such function"}
	default:
		return &sherpa.Error{Code: sherpa.SherpaHTTPError, Message: "HTTP error from server: " + resp.Status}
	}
}
"#;

/// Client type, constructor and call primitive, with `base_url` already quoted as a Go literal.
pub fn client_prelude(quoted_base_url: &str) -> String {
    let mut out = String::from(CLIENT_TYPE);
    out.push('\n');
    out.push_str("// NewClient returns a client for the API at its default base URL.\n");
    out.push_str("func NewClient() *Client {\n");
    out.push_str("\treturn &Client{\n");
    out.push_str(&format!("\t\tBaseURL: {quoted_base_url},\n"));
    out.push_str("\t\tClient:  http.DefaultClient,\n");
    out.push_str("\t}\n");
    out.push_str("}\n\n");
    out.push_str(CALL_PRIMITIVE);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_prelude_bakes_in_base_url() {
        let prelude = client_prelude(r#""https://example.com/api/""#);
        assert!(prelude.contains("\t\tBaseURL: \"https://example.com/api/\",\n"));
        assert!(prelude.contains("type Client struct {"));
        assert!(prelude.contains("func (c *Client) call(ctx context.Context"));
    }

    #[test]
    fn test_call_primitive_error_mapping() {
        let prelude = client_prelude(r#""http://localhost/""#);
        assert!(prelude.contains("sherpa.SherpaBadFunction"));
        assert!(prelude.contains("sherpa.SherpaBadResponse"));
        assert!(prelude.contains("\"sherpa:parameter encode error\""));
        assert!(prelude.contains("http.NewRequestWithContext(ctx, \"POST\", url, buf)"));
    }
}
