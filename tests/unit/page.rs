use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_page").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const CONFIG: &str = r#"{"i_size": 512, "t_sizes": [64, 8], "prefix": "shape"}"#;

#[test]
fn placeholders_become_json_values() {
    let cfg: serde_json::Value = serde_json::from_str(CONFIG).unwrap();
    let out = substitute_placeholders(
        "const size = I_SIZE; const tiles = T_SIZES; const prefix = S_PREFIX;",
        &cfg,
    )
    .unwrap();
    assert_eq!(
        out,
        r#"const size = 512; const tiles = [64,8]; const prefix = "shape";"#
    );
}

#[test]
fn missing_keys_are_reported() {
    let cfg = serde_json::json!({"i_size": 512});
    assert_eq!(
        substitute_placeholders("I_SIZE", &cfg).unwrap_err(),
        vec!["t_sizes", "prefix"]
    );
    assert_eq!(missing_keys(&serde_json::json!([1, 2])).len(), 3);
}

#[test]
fn success_writes_output() {
    let dir = scratch("ok");
    std::fs::write(dir.join("config.json"), CONFIG).unwrap();
    std::fs::write(dir.join("page.template"), "<p>I_SIZE S_PREFIX</p>").unwrap();
    render_page(
        &dir.join("config.json"),
        &dir.join("page.template"),
        &dir.join("page.html"),
    )
    .unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.join("page.html")).unwrap(),
        r#"<p>512 "shape"</p>"#
    );
}

#[test]
fn each_failure_has_its_own_exit_code() {
    let dir = scratch("codes");
    let template = dir.join("page.template");
    std::fs::write(&template, "I_SIZE").unwrap();

    let unreadable = render_page(&dir.join("nope.json"), &template, &dir.join("a.html"));
    assert_eq!(unreadable.unwrap_err().exit_code(), 1);

    std::fs::write(dir.join("bad.json"), "{not json").unwrap();
    let unparsable = render_page(&dir.join("bad.json"), &template, &dir.join("a.html"));
    assert_eq!(unparsable.unwrap_err().exit_code(), 1);

    std::fs::write(dir.join("partial.json"), r#"{"i_size": 1}"#).unwrap();
    let missing = render_page(
        &dir.join("partial.json"),
        &dir.join("no.template"),
        &dir.join("a.html"),
    );
    let err = missing.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("must contain"));

    std::fs::write(dir.join("config.json"), CONFIG).unwrap();
    let no_template = render_page(
        &dir.join("config.json"),
        &dir.join("no.template"),
        &dir.join("a.html"),
    );
    assert_eq!(no_template.unwrap_err().exit_code(), 3);

    let unwritable = render_page(
        &dir.join("config.json"),
        &template,
        &dir.join("missing_dir").join("a.html"),
    );
    assert_eq!(unwritable.unwrap_err().exit_code(), 4);
}
