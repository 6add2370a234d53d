//! Home Screen Tests - Hit Testing, Popup Flow and Drawing
//!
//! Drives the home screen controller headlessly through a recording
//! canvas. Default window is 1280x720: the button spans x 490..=790,
//! y 216..=296 and the popup spans x 430..=850, y 270..=450.

use std::fs;

use upside_down_engine::game::{
    AssetError, GameSettings, HomeScreenController, home_image_path, load_background,
};
use upside_down_engine::input::{InputEvent, KeyCode, ModifierState, MouseButton};
use upside_down_engine::render::{
    Capabilities, Color, DrawCommand, DrawList, TextLabel, fit_texture_limit,
};

fn controller() -> HomeScreenController {
    HomeScreenController::with_background(&GameSettings::default(), None)
}

fn press(c: &mut HomeScreenController, x: f32, y: f32) {
    c.on_mouse_press(x, y, MouseButton::Left, ModifierState::new());
}

fn escape(c: &mut HomeScreenController) {
    c.on_key_press(KeyCode::Escape, ModifierState::new());
}

fn assert_invariant(c: &HomeScreenController) {
    assert!(
        c.show_popup() || !c.is_pressed(),
        "pressed without popup: {:?}",
        c.state()
    );
}

fn settings_with_assets(dir: &std::path::Path) -> GameSettings {
    GameSettings {
        assets_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_inside_and_outside() {
    let mut c = controller();
    let button = c.layout().button;

    for x in [button.left + 1.0, button.center().0, button.right() - 1.0] {
        for y in [button.bottom + 1.0, button.center().1, button.top() - 1.0] {
            c.on_mouse_motion(x, y, 0.0, 0.0);
            assert!(c.is_hover(), "expected hover at ({x}, {y})");
        }
    }

    for (x, y) in [
        (button.left - 1.0, button.center().1),
        (button.right() + 1.0, button.center().1),
        (button.center().0, button.bottom - 1.0),
        (button.center().0, button.top() + 1.0),
        (0.0, 0.0),
        (1280.0, 720.0),
    ] {
        c.on_mouse_motion(x, y, 0.0, 0.0);
        assert!(!c.is_hover(), "unexpected hover at ({x}, {y})");
    }
}

#[test]
fn test_hover_boundary_is_inclusive() {
    let mut c = controller();
    for (x, y) in [(490.0, 216.0), (790.0, 216.0), (490.0, 296.0), (790.0, 296.0)] {
        c.on_mouse_motion(0.0, 0.0, 0.0, 0.0);
        c.on_mouse_motion(x, y, 0.0, 0.0);
        assert!(c.is_hover(), "corner ({x}, {y}) should hover");
    }
}

#[test]
fn test_hover_does_not_touch_other_flags() {
    let mut c = controller();
    c.on_mouse_motion(640.0, 256.0, 3.0, -2.0);
    assert!(c.is_hover());
    assert!(!c.is_pressed());
    assert!(!c.show_popup());
}

// ============================================================================
// Press / popup flow
// ============================================================================

#[test]
fn test_press_outside_button_without_popup_changes_nothing() {
    let mut c = controller();
    c.on_mouse_motion(100.0, 100.0, 0.0, 0.0);
    let before = c.state();
    press(&mut c, 100.0, 100.0);
    press(&mut c, 489.0, 256.0);
    press(&mut c, 640.0, 297.0);
    assert_eq!(c.state(), before);
}

#[test]
fn test_press_on_button_edge_opens_popup() {
    let mut c = controller();
    press(&mut c, 490.0, 216.0);
    assert!(c.is_pressed());
    assert!(c.show_popup());
}

#[test]
fn test_any_mouse_button_opens_popup() {
    for button in [MouseButton::Right, MouseButton::Middle, MouseButton::Other(4)] {
        let mut c = controller();
        let modifiers = ModifierState {
            shift: true,
            ..Default::default()
        };
        c.on_mouse_press(640.0, 256.0, button, modifiers);
        assert!(c.show_popup(), "{button:?} should open the popup");
    }
}

#[test]
fn test_press_inside_popup_keeps_it_open() {
    let mut c = controller();
    press(&mut c, 640.0, 256.0);
    for (x, y) in [(640.0, 360.0), (430.0, 270.0), (850.0, 450.0), (430.0, 450.0)] {
        press(&mut c, x, y);
        assert!(c.show_popup(), "click at ({x}, {y}) should be absorbed");
        assert!(c.is_pressed());
    }
}

#[test]
fn test_press_outside_popup_closes_it() {
    let mut c = controller();
    press(&mut c, 640.0, 256.0);
    press(&mut c, 429.0, 360.0);
    assert!(!c.show_popup());
    assert!(!c.is_pressed());
}

#[test]
fn test_press_on_button_below_popup_closes_instead_of_reopening() {
    // (640, 256) is on the button but below the popup panel
    let mut c = controller();
    press(&mut c, 640.0, 256.0);
    press(&mut c, 640.0, 256.0);
    assert!(!c.show_popup());
    assert!(!c.is_pressed());

    // The next press opens it again
    press(&mut c, 640.0, 256.0);
    assert!(c.show_popup());
}

#[test]
fn test_escape_closes_popup() {
    let mut c = controller();
    press(&mut c, 640.0, 256.0);
    escape(&mut c);
    assert!(!c.show_popup());
    assert!(!c.is_pressed());
}

#[test]
fn test_other_keys_ignored() {
    let mut c = controller();
    press(&mut c, 640.0, 256.0);
    for key in [KeyCode::Enter, KeyCode::Space, KeyCode::Other] {
        c.on_key_press(key, ModifierState::new());
        assert!(c.show_popup());
    }
}

#[test]
fn test_escape_without_popup_is_noop() {
    let mut c = controller();
    c.on_mouse_motion(640.0, 256.0, 0.0, 0.0);
    let before = c.state();
    escape(&mut c);
    assert_eq!(c.state(), before);
}

#[test]
fn test_scenario_hover_press_dismiss() {
    let mut c = controller();
    let (cx, cy) = c.layout().button.center();

    c.on_mouse_motion(cx, cy, 0.0, 0.0);
    assert!(c.is_hover());

    press(&mut c, cx, cy);
    assert!(c.is_pressed() && c.show_popup());

    press(&mut c, 0.0, 0.0);
    assert!(!c.is_pressed() && !c.show_popup());
}

#[test]
fn test_handle_event_dispatch() {
    let mut c = controller();
    c.handle_event(&InputEvent::PointerMoved {
        x: 640.0,
        y: 256.0,
        dx: 1.0,
        dy: 1.0,
    });
    assert!(c.is_hover());

    c.handle_event(&InputEvent::PointerPressed {
        x: 640.0,
        y: 256.0,
        button: MouseButton::Left,
        modifiers: ModifierState::new(),
    });
    assert!(c.show_popup());

    c.handle_event(&InputEvent::KeyPressed {
        key: KeyCode::Escape,
        modifiers: ModifierState::new(),
    });
    assert!(!c.show_popup());
}

#[test]
fn test_invariant_over_event_sequences() {
    // Small LCG so the sequence is deterministic
    let mut seed: u32 = 0x2545_f491;
    let mut next = move || {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        seed
    };

    let mut c = controller();
    for _ in 0..5_000 {
        let x = (next() % 1281) as f32;
        let y = (next() % 721) as f32;
        match next() % 4 {
            0 => c.on_mouse_motion(x, y, 0.0, 0.0),
            1 => escape(&mut c),
            _ => press(&mut c, x, y),
        }
        assert_invariant(&c);
    }
}

// ============================================================================
// Drawing
// ============================================================================

fn button_fill(list: &DrawList) -> Color {
    // Clear, background, then the button fill
    match list.commands()[2] {
        DrawCommand::FillRect { color, .. } => color,
        ref other => panic!("expected button fill, got {other:?}"),
    }
}

#[test]
fn test_render_idle_frame() {
    let c = controller();
    let mut list = DrawList::new();
    c.render(&mut list);

    let commands = list.commands();
    assert_eq!(commands.len(), 6);
    assert_eq!(commands[0], DrawCommand::Clear(Color::BLACK));
    assert_eq!(
        commands[1],
        DrawCommand::FillRect {
            rect: c.layout().screen,
            color: Color::rgb(47, 79, 79),
        }
    );
    assert_eq!(button_fill(&list), Color::rgb(200, 150, 0));
    assert_eq!(
        commands[3],
        DrawCommand::OutlineRect {
            rect: c.layout().button,
            color: Color::BLACK,
            border_width: 3.0,
        }
    );

    let labels: Vec<&TextLabel> = commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text(label) => Some(label),
            _ => None,
        })
        .collect();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "START");
    assert_eq!(labels[0].color, Color::WHITE);
    assert_eq!(labels[0].size, 30.0);
    assert_eq!(labels[1].text, ".....");
    assert_eq!(labels[1].color, Color::rgb(220, 220, 220));
    assert_eq!((labels[1].x, labels[1].y), (640.0, 129.0));
}

#[test]
fn test_start_label_centered_in_button() {
    let c = controller();
    let bounds = c.button().label.bounds();
    let (bx, by) = c.layout().button.center();
    let (lx, ly) = bounds.center();
    assert!((bx - lx).abs() < 1e-3);
    assert!((by - ly).abs() < 1e-3);
    assert!(c.layout().button.contains(bounds.left, bounds.bottom));
    assert!(c.layout().button.contains(bounds.right(), bounds.top()));
}

#[test]
fn test_button_color_precedence() {
    let mut c = controller();
    let mut list = DrawList::new();

    c.on_mouse_motion(640.0, 256.0, 0.0, 0.0);
    c.render(&mut list);
    assert_eq!(button_fill(&list), Color::rgb(255, 200, 0));

    // Pressed wins over hover
    press(&mut c, 640.0, 256.0);
    list.clear_commands();
    c.render(&mut list);
    assert_eq!(button_fill(&list), Color::rgb(150, 0, 0));

    // Pressed, no longer hovered
    c.on_mouse_motion(10.0, 10.0, 0.0, 0.0);
    list.clear_commands();
    c.render(&mut list);
    assert_eq!(button_fill(&list), Color::rgb(150, 0, 0));
}

#[test]
fn test_render_popup_layers() {
    let mut c = controller();
    press(&mut c, 640.0, 256.0);
    let mut list = DrawList::new();
    c.render(&mut list);

    let commands = list.commands();
    let tail = &commands[commands.len() - 4..];
    assert_eq!(
        tail[0],
        DrawCommand::FillRect {
            rect: c.layout().screen,
            color: Color::rgba(0, 0, 0, 120),
        }
    );
    assert_eq!(
        tail[1],
        DrawCommand::FillRect {
            rect: c.layout().popup,
            color: Color::WHITE,
        }
    );
    assert_eq!(
        tail[2],
        DrawCommand::OutlineRect {
            rect: c.layout().popup,
            color: Color::BLACK,
            border_width: 2.0,
        }
    );
    match &tail[3] {
        DrawCommand::Text(label) => {
            assert_eq!(label.text, "COMING SOON");
            assert_eq!(label.color, Color::BLACK);
            assert_eq!((label.x, label.y), c.layout().popup.center());
        }
        other => panic!("expected popup label, got {other:?}"),
    }
}

#[test]
fn test_overlay_opaque_without_translucency() {
    let mut c = controller();
    press(&mut c, 640.0, 256.0);
    let mut list = DrawList::with_capabilities(Capabilities {
        translucent_fill: false,
    });
    c.render(&mut list);

    let overlay = DrawCommand::FillRect {
        rect: c.layout().screen,
        color: Color::BLACK,
    };
    assert!(list.commands().contains(&overlay));
    assert!(!list.commands().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::FillRect { color, .. } if !color.is_opaque()
    )));
}

#[test]
fn test_no_popup_commands_after_close() {
    let mut c = controller();
    press(&mut c, 640.0, 256.0);
    escape(&mut c);
    let mut list = DrawList::new();
    c.render(&mut list);
    assert_eq!(list.len(), 6);
}

// ============================================================================
// Background asset
// ============================================================================

#[test]
fn test_missing_asset_falls_back_to_flat_fill() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_with_assets(dir.path());

    let err = load_background(&home_image_path(dir.path())).unwrap_err();
    assert!(matches!(err, AssetError::NotFound { .. }));

    let c = HomeScreenController::new(&settings);
    assert!(c.background().is_none());

    let mut list = DrawList::new();
    c.render(&mut list);
    assert_eq!(
        list.commands()[1],
        DrawCommand::FillRect {
            rect: c.layout().screen,
            color: Color::DARK_SLATE_GRAY,
        }
    );
}

#[test]
fn test_corrupt_asset_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = home_image_path(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"definitely not a png").unwrap();

    let err = load_background(&path).unwrap_err();
    assert!(matches!(err, AssetError::Decode { .. }), "got {err:?}");

    let c = HomeScreenController::new(&settings_with_assets(dir.path()));
    assert!(c.background().is_none());
    assert!(!c.show_popup());
}

#[test]
fn test_valid_asset_is_drawn_as_background() {
    let dir = tempfile::tempdir().unwrap();
    let path = home_image_path(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbaImage::from_pixel(8, 4, image::Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();

    let c = HomeScreenController::new(&settings_with_assets(dir.path()));
    let background = c.background().expect("background should load");
    assert_eq!((background.width(), background.height()), (8, 4));

    let mut list = DrawList::new();
    c.render(&mut list);
    assert_eq!(list.commands()[1], DrawCommand::Background(c.layout().screen));
}

#[test]
fn test_button_popup_overlap_only_hits_popup() {
    let mut c = controller();
    let (button, popup) = (c.layout().button, c.layout().popup);
    assert!(popup.bottom <= button.top(), "regions overlap at 1280x720");

    press(&mut c, 640.0, 256.0);
    assert!(c.show_popup());

    // Shared strip belongs to the popup while it is open
    press(&mut c, 640.0, 280.0);
    assert!(c.show_popup() && c.is_pressed());

    // Uncovered button area is outside the popup and closes it
    press(&mut c, 640.0, 230.0);
    assert!(!c.show_popup() && !c.is_pressed());
}

#[test]
fn test_oversized_asset_fits_minimum_texture_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = home_image_path(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbaImage::from_pixel(2560, 1440, image::Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();

    let c = HomeScreenController::new(&settings_with_assets(dir.path()));
    let background = c.background().expect("large background should still load");
    assert_eq!((background.width(), background.height()), (2560, 1440));

    // Every adapter supports at least the downlevel limit
    let limit = wgpu::Limits::downlevel_defaults().max_texture_dimension_2d;
    let fitted = fit_texture_limit(background.pixels.clone(), limit);
    assert_eq!(fitted.dimensions(), (limit, limit * 9 / 16));
}
