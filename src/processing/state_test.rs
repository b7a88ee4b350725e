use super::*;

#[test]
fn test_config_load_transitions() {
    use ProcessingStatus::*;

    assert_eq!(Disabled.after_config_load(true), AutoEnabled);
    assert_eq!(ManualEnabled.after_config_load(true), AutoEnabled);
    assert_eq!(AutoEnabled.after_config_load(true), AutoEnabled);

    // Revoking auto-enable forces off
    assert_eq!(AutoEnabled.after_config_load(false), Disabled);

    // Otherwise left unchanged
    assert_eq!(Disabled.after_config_load(false), Disabled);
    assert_eq!(ManualEnabled.after_config_load(false), ManualEnabled);
}

#[test]
fn test_toggle_transitions() {
    use ProcessingStatus::*;

    assert_eq!(Disabled.toggled(), ManualEnabled);
    assert_eq!(AutoEnabled.toggled(), ManualEnabled);
    assert_eq!(ManualEnabled.toggled(), Disabled);
}

#[test]
fn test_double_toggle_restores_original_status() {
    for status in [ProcessingStatus::Disabled, ProcessingStatus::ManualEnabled] {
        assert_eq!(status.toggled().toggled(), status);
    }
}

#[test]
fn test_only_disabled_is_inactive() {
    assert!(!ProcessingStatus::Disabled.is_enabled());
    assert!(ProcessingStatus::AutoEnabled.is_enabled());
    assert!(ProcessingStatus::ManualEnabled.is_enabled());
}

#[test]
fn test_unseen_profile_defaults_to_disabled() {
    let map = StatusMap::new();
    let profile = ProfileId::named("reading");

    assert_eq!(map.get(&profile), ProcessingStatus::Disabled);
    assert!(!map.has_seen(&profile));
}

#[test]
fn test_statuses_are_tracked_per_profile() {
    let mut map = StatusMap::new();
    let normal = ProfileId::normal();
    let excel = ProfileId::named("excel");

    map.toggle(&normal);
    map.on_config_load(&excel, true);

    assert_eq!(map.get(&normal), ProcessingStatus::ManualEnabled);
    assert_eq!(map.get(&excel), ProcessingStatus::AutoEnabled);
    assert_eq!(map.len(), 2);
}

#[test]
fn test_first_profile_visit_applies_auto_enable() {
    let mut map = StatusMap::new();
    let profile = ProfileId::named("browser");

    assert_eq!(map.on_profile_enter(&profile, true), ProcessingStatus::AutoEnabled);
    assert!(map.has_seen(&profile));
}

#[test]
fn test_revisit_keeps_manual_choice_with_auto_enable() {
    let mut map = StatusMap::new();
    let profile = ProfileId::named("browser");

    map.on_profile_enter(&profile, true);
    map.toggle(&profile);
    map.toggle(&profile);
    assert_eq!(map.get(&profile), ProcessingStatus::Disabled);

    assert_eq!(map.on_profile_enter(&profile, true), ProcessingStatus::Disabled);
}

#[test]
fn test_revisit_with_revoked_auto_enable_turns_off() {
    let mut map = StatusMap::new();
    let profile = ProfileId::named("browser");

    map.on_profile_enter(&profile, true);
    assert_eq!(map.on_profile_enter(&profile, false), ProcessingStatus::Disabled);
}

#[test]
fn test_clear_forgets_every_profile() {
    let mut map = StatusMap::new();
    map.toggle(&ProfileId::normal());
    map.toggle(&ProfileId::named("a"));

    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.get(&ProfileId::normal()), ProcessingStatus::Disabled);
}

#[test]
fn test_profile_id_display_and_parsing() {
    assert_eq!(ProfileId::normal().to_string(), NORMAL_CONFIGURATION_NAME);
    assert_eq!(ProfileId::named("Say all").to_string(), "Say all");
    assert_eq!(ProfileId::from_optional(None), ProfileId::normal());
    assert_eq!(ProfileId::from_optional(Some("  ")), ProfileId::normal());
    assert_eq!(
        ProfileId::from_optional(Some(" word ")),
        ProfileId::named("word")
    );
}

#[test]
fn test_profile_context_switch_returns_previous() {
    let mut context = ProfileContext::new(ProfileId::normal());

    let previous = context.switch_to(ProfileId::named("mail"));

    assert_eq!(previous, ProfileId::normal());
    assert_eq!(context.active(), &ProfileId::named("mail"));
}
