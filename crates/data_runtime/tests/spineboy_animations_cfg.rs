use data_runtime::configs::spineboy_animations::load_default;

#[test]
fn shipped_table_and_name_override() {
    unsafe {
        std::env::set_var("SPINEBOY_ANIM_HOVER", "hoverboard-alt");
        std::env::set_var("SPINEBOY_ANIM_MIX", "0.35");
    }
    let cfg = load_default().expect("load");
    let hover = cfg.clip("hover").expect("hover clip");
    assert_eq!(hover.name.as_deref(), Some("hoverboard-alt"));
    assert_eq!(hover.looping, Some(true));
    let jump = cfg.clip("jump").expect("jump clip");
    assert_eq!(jump.time_scale, Some(1.5));
    assert_eq!(cfg.default_mix, Some(0.35));
    assert!(cfg.clips.contains_key("portal"));
    assert!(cfg.clip("dance").is_none());
}
