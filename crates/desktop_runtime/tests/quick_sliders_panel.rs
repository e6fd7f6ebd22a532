use desktop_runtime::{ConfigError, PanelChange, QuickSlidersPanel, WidgetConfig};
use platform_host::{HostServices, LevelSnapshot, MemoryLevelService};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};
use system_ui::{OverlayAnchor, SliderKind, EDGE_MARGIN_PX, HANDLE_MARGIN_PX};

fn temp_config(prefix: &str, contents: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{}_{}", process::id(), nanos));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("quick-controls.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn config_file_drives_mounted_sliders() {
    let path = temp_config(
        "quick_sliders_file",
        "[quick_sliders]\nshow_brightness = false\nshow_mic = true\n",
    );
    let config = WidgetConfig::load(&path).expect("load config");
    let panel = QuickSlidersPanel::new(
        &config.quick_sliders,
        HostServices::in_memory(0.3, 0.6, 0.9),
    );

    assert_eq!(
        panel.mounted_kinds(),
        vec![SliderKind::OutputVolume, SliderKind::InputVolume]
    );
    assert!(panel.slider(SliderKind::Brightness).is_none());

    let _ = fs::remove_dir_all(path.parent().expect("temp dir"));
}

#[test]
fn invalid_config_file_is_reported_not_defaulted() {
    let path = temp_config("quick_sliders_invalid", "[button]\ntooltip_delay_ms = 0\n");
    let err = WidgetConfig::load(&path).expect_err("zero delay rejected");
    assert!(matches!(err, ConfigError::Validation(_)));

    let _ = fs::remove_dir_all(path.parent().expect("temp dir"));
}

#[test]
fn drags_reach_the_matching_service_only() {
    let brightness = Rc::new(MemoryLevelService::new("brightness", 0.5));
    let volume = Rc::new(MemoryLevelService::new("output-volume", 0.5));
    let services = HostServices {
        brightness: Some(brightness.clone()),
        output_volume: Some(volume.clone()),
        input_volume: None,
    };
    let panel = QuickSlidersPanel::new(&WidgetConfig::default().quick_sliders, services);

    assert!(panel.drag(SliderKind::OutputVolume, 0.95));
    assert_eq!(volume.writes(), 1);
    assert_eq!(brightness.writes(), 0);

    let slider = panel.slider(SliderKind::OutputVolume).expect("volume slider");
    assert_eq!(slider.value(), 0.95);
    let overlay = slider.config().overlay();
    assert_eq!(overlay.anchor, OverlayAnchor::Handle);
    assert_eq!(overlay.margin_px, HANDLE_MARGIN_PX);

    let overlay = panel
        .slider(SliderKind::Brightness)
        .expect("brightness slider")
        .config()
        .overlay();
    assert_eq!(overlay.anchor, OverlayAnchor::PanelEdge);
    assert_eq!(overlay.margin_px, EDGE_MARGIN_PX);
}

#[test]
fn out_of_range_drags_are_clamped_before_the_setter() {
    let volume = Rc::new(MemoryLevelService::new("output-volume", 0.5));
    let services = HostServices {
        output_volume: Some(volume.clone()),
        ..HostServices::empty()
    };
    let panel = QuickSlidersPanel::new(&WidgetConfig::default().quick_sliders, services);

    assert!(panel.drag(SliderKind::OutputVolume, 1.7));
    assert_eq!(
        panel.slider(SliderKind::OutputVolume).map(|slider| slider.value()),
        Some(1.0)
    );
}

#[test]
fn backend_updates_flow_into_mounted_sliders() {
    let volume = Rc::new(MemoryLevelService::new("output-volume", 0.2));
    let services = HostServices {
        output_volume: Some(volume.clone()),
        ..HostServices::empty()
    };
    let panel = QuickSlidersPanel::new(&WidgetConfig::default().quick_sliders, services);

    volume.publish(LevelSnapshot::available(0.75));
    assert_eq!(
        panel.slider(SliderKind::OutputVolume).map(|slider| slider.value()),
        Some(0.75)
    );
    assert_eq!(
        panel.slider(SliderKind::Brightness).map(|slider| slider.value()),
        Some(0.0)
    );
}

#[test]
fn toggling_a_slider_releases_its_subscription() {
    let mic = Rc::new(MemoryLevelService::new("input-volume", 0.4));
    let services = HostServices {
        input_volume: Some(mic.clone()),
        ..HostServices::empty()
    };
    let mut config = WidgetConfig::default().quick_sliders;
    config.show_mic = true;
    let mut panel = QuickSlidersPanel::new(&config, services);
    assert_eq!(mic.subscriber_count(), 1);

    config.show_mic = false;
    assert_eq!(
        panel.apply_config(&config),
        vec![PanelChange::Unmounted(SliderKind::InputVolume)]
    );
    assert_eq!(mic.subscriber_count(), 0);

    config.show_mic = true;
    assert_eq!(
        panel.apply_config(&config),
        vec![PanelChange::Mounted(SliderKind::InputVolume)]
    );
    assert_eq!(mic.subscriber_count(), 1);
    assert_eq!(
        panel.slider(SliderKind::InputVolume).map(|slider| slider.value()),
        Some(0.4)
    );
}

#[test]
fn default_config_mounts_every_slider() {
    let config = WidgetConfig::from_toml_str("").expect("empty config");
    let panel = QuickSlidersPanel::new(&config.quick_sliders, HostServices::empty());
    assert_eq!(
        panel.mounted_kinds(),
        vec![
            SliderKind::Brightness,
            SliderKind::OutputVolume,
            SliderKind::InputVolume
        ]
    );
}

#[test]
fn rendered_config_is_inert_without_a_device() {
    let mic = Rc::new(MemoryLevelService::unavailable("input-volume"));
    let services = HostServices {
        input_volume: Some(mic.clone()),
        ..HostServices::in_memory(0.5, 0.5, 0.5)
    };
    let panel = QuickSlidersPanel::new(&WidgetConfig::default().quick_sliders, services);

    let mut mic_config = panel
        .slider(SliderKind::InputVolume)
        .expect("mic slider")
        .config();
    assert!(!mic_config.is_interactive());
    assert!(!mic_config.drag(0.8));
    assert_eq!(mic.writes(), 0);

    let mut volume_config = panel
        .slider(SliderKind::OutputVolume)
        .expect("volume slider")
        .config();
    assert!(volume_config.is_interactive());
    assert!(volume_config.drag(0.8));
    assert_eq!(
        panel.slider(SliderKind::OutputVolume).map(|slider| slider.value()),
        Some(0.8)
    );
}
