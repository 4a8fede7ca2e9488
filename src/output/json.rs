use crate::generate::TestStub;
use crate::output::source::render_stub;

/// Render stub metadata as a pretty JSON array, one object per stub.
pub(crate) fn output_stubs_json(stubs: &[TestStub], helper: &str) -> String {
    let items: Vec<serde_json::Value> = stubs
        .iter()
        .map(|stub| {
            serde_json::json!({
                "name": stub.name,
                "path": stub.path,
                "code": render_stub(stub, helper),
            })
        })
        .collect();
    serde_json::to_string_pretty(&items).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_carries_name_path_and_code() {
        let stubs = vec![TestStub {
            name: "roundtrip_sf_w_game_3".to_string(),
            path: "tests/uci_logs/sf_w_game_3.txt".to_string(),
        }];
        let json = output_stubs_json(&stubs, "roundtrip_logs");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["name"].as_str(), Some("roundtrip_sf_w_game_3"));
        assert_eq!(
            arr[0]["path"].as_str(),
            Some("tests/uci_logs/sf_w_game_3.txt")
        );
        assert_eq!(
            arr[0]["code"].as_str(),
            Some(render_stub(&stubs[0], "roundtrip_logs").as_str())
        );
    }

    #[test]
    fn empty_plan_is_an_empty_array() {
        assert_eq!(output_stubs_json(&[], "roundtrip_logs"), "[]");
    }
}
