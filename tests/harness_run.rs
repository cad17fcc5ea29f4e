//! Tests for the scripted chat display harness.

use std::io::Write;

use chat_overlay::{default_steps, ChatDisplayHarness, Config, PostOutcome, TestStep};

#[tokio::test]
async fn test_default_run_transcript() {
    let mut harness = ChatDisplayHarness::setup(&Config::default()).await.unwrap();
    harness.run_all(&default_steps()).unwrap();

    let transcript = harness.transcript().await.unwrap();
    assert_eq!(
        transcript,
        vec![
            "<User 0> This message for test from offline.",
            "<User 1> TestMessage",
            "<User 2> !@#$%^&&*()",
            "<User 3> testTEST",
            "<DummyUser> Hello",
            "<Over15LengthUserName> Over15LengthUserName",
            "<WWWWWWWWWWWWWWW> Wide!",
        ]
    );
}

#[tokio::test]
async fn test_channel_metadata_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
[chat]
username = "Tester"

[channel]
id = 9
name = "#osu"
topic = "General"
type = "Public"
seed_messages = ["welcome"]
"##
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let mut harness = ChatDisplayHarness::setup(&config).await.unwrap();
    assert_eq!(harness.channel_id(), 9);

    harness.run_step(&TestStep::post("/me waves")).unwrap();

    let info = harness
        .overlay()
        .scheduler()
        .query(|channels| channels.list_channels())
        .await
        .unwrap();
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].name, "#osu");
    assert_eq!(info[0].topic, "General");
    assert_eq!(info[0].channel_type, "Public");
    assert_eq!(info[0].entry_count, 2);

    assert_eq!(
        harness.transcript().await.unwrap(),
        vec!["<User 0> welcome", "* Tester waves"]
    );
}

#[tokio::test]
async fn test_feedback_steps_do_not_post_messages() {
    let mut harness = ChatDisplayHarness::setup(&Config::default()).await.unwrap();

    let outcomes = harness
        .run_all(&[
            TestStep::post("/help"),
            TestStep::post("/me"),
            TestStep::post("/dance now"),
            TestStep::post("   "),
        ])
        .unwrap();

    assert!(matches!(outcomes[0], PostOutcome::Feedback(_)));
    assert!(matches!(outcomes[1], PostOutcome::Feedback(_)));
    assert!(matches!(outcomes[2], PostOutcome::Feedback(_)));
    assert_eq!(outcomes[3], PostOutcome::Ignored);

    let channels = harness.shutdown().await.unwrap();
    let channel = channels.get(0).unwrap();
    assert_eq!(channel.messages().count(), 4);
    assert_eq!(
        &channel.transcript()[4..],
        &[
            "*** Supported commands: /help, /me [action]",
            "*** Usage: /me [action]",
            "*** \"/dance\" is not supported! For a list of supported commands see /help",
        ]
    );
}
