use langsync::mcp::{
    LangsyncMcpServer,
    types::{CheckOverridesParams, SyncOverridesParams},
};
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;

use crate::{CHAT_DEFAULTS, extract_tool_result_json, fixture_with_chat};

// ============================================================================
// check_overrides tests
// ============================================================================

#[tokio::test]
async fn test_check_overrides_reports_without_writing() {
    let fixture = fixture_with_chat().unwrap();
    let server = LangsyncMcpServer::new();

    let params = Parameters(CheckOverridesParams {
        project_root_path: fixture.root(),
    });
    let result = server.check_overrides(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["applied"], false);
    assert_eq!(json_result["stats"]["createdOverride"], 1);
    assert_eq!(json_result["targets"][0]["language"], "en-US");
    assert_eq!(json_result["targets"][0]["file"], "Chat.lang");
    assert_eq!(json_result["targets"][0]["status"], "CREATED_OVERRIDE");
    assert_eq!(json_result["targets"][0]["count"], 2);
    assert!(!fixture.root_path().join("overrides").exists());
}

#[tokio::test]
async fn test_check_overrides_missing_defaults_root_is_error() {
    let fixture = crate::McpTestFixture::new().unwrap();
    let server = LangsyncMcpServer::new();

    let params = Parameters(CheckOverridesParams {
        project_root_path: fixture.root(),
    });

    assert!(server.check_overrides(params).await.is_err());
}

// ============================================================================
// sync_overrides tests
// ============================================================================

#[tokio::test]
async fn test_sync_overrides_merges_and_writes() {
    let fixture = fixture_with_chat().unwrap();
    fixture
        .write_file("overrides/en-US/Chat.lang", "# Chat\nChat.Hello=Hi\n")
        .unwrap();
    let server = LangsyncMcpServer::new();

    let params = Parameters(SyncOverridesParams {
        project_root_path: fixture.root(),
    });
    let result = server.sync_overrides(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["applied"], true);
    assert_eq!(json_result["stats"]["merged"], 1);
    assert_eq!(json_result["targets"][0]["status"], "MERGED");
    assert_eq!(json_result["targets"][0]["addedCount"], 1);
    assert_eq!(json_result["targets"][0]["message"], "Added 1 new translation(s)");
    assert_eq!(
        fixture.read_file("overrides/en-US/Chat.lang").unwrap(),
        "# Chat\nChat.Hello=Hi\n# Chat.Bye=Goodbye\n"
    );
}

#[tokio::test]
async fn test_sync_overrides_twice_is_no_changes() {
    let fixture = fixture_with_chat().unwrap();
    fixture
        .write_file("overrides/en-US/Chat.lang", CHAT_DEFAULTS)
        .unwrap();
    let server = LangsyncMcpServer::new();

    let params = Parameters(SyncOverridesParams {
        project_root_path: fixture.root(),
    });
    let result = server.sync_overrides(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["stats"]["noChanges"], 1);
    assert_eq!(json_result["targets"][0]["message"], "No new translations");
    assert_eq!(
        fixture.read_file("overrides/en-US/Chat.lang").unwrap(),
        CHAT_DEFAULTS
    );
}
