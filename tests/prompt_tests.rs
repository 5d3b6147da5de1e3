use briefbot::prompt::{SYSTEM_PROMPT, build_messages, build_user_prompt};

#[test]
fn test_user_prompt_embeds_digest() {
    let digest = "Rust - https://rust-lang.org\nCrates - https://crates.io";
    let prompt = build_user_prompt(digest);

    assert!(prompt.starts_with("Summarize and explain these search results:\n"));
    assert!(prompt.ends_with(digest));
}

#[test]
fn test_messages_are_system_then_user() {
    let messages = build_messages("Rust - https://rust-lang.org");
    let messages = messages.as_array().expect("messages should be an array");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(
        messages[1]["content"],
        "Summarize and explain these search results:\nRust - https://rust-lang.org"
    );
}

#[test]
fn test_system_prompt_names_the_persona() {
    assert!(SYSTEM_PROMPT.contains("summarizes search results concisely"));
}
