//! Viewport regression test
//!
//! Drives the compositor through the state value exactly as a host
//! would: install buffers, feed input events, render, pick.

use rasterlab_core::{PixelBuffer, Sample};
use rasterlab_test::{RegParams, quadrant_buffer, uniform_buffer};
use rasterlab_view::{
    DisplaySurface, EditorState, InputEvent, Key, SCALE_MAX, SCALE_MIN, fit_scale, pick, render,
};

#[test]
fn viewport_reg() {
    let mut rp = RegParams::new("viewport");

    let committed = uniform_buffer(4, 4, Sample::opaque(40, 80, 120));
    let mut state = EditorState::new(committed.clone());
    let mut surface = DisplaySurface::new(10, 10).expect("surface");

    // --- Test 1: rendering twice is byte-identical ---
    render(&state, &mut surface).expect("first render");
    let first = surface.clone();
    render(&state, &mut surface).expect("second render");
    rp.compare_buffers(first.buffer(), surface.buffer());

    // --- Test 2: the image is centered, background elsewhere ---
    // 4x4 image in a 10x10 surface at 100%: origin (3, 3).
    rp.check(
        surface.buffer().sample_unchecked(0, 0) == Sample::WHITE,
        "outside the image should be background",
    );
    rp.check(
        surface.buffer().sample_unchecked(5, 5) == Sample::opaque(40, 80, 120),
        "center should show the committed image",
    );
    rp.check(
        surface.buffer().sample_unchecked(3, 3) == Sample::opaque(40, 80, 120),
        "image top-left corner",
    );
    rp.check(
        surface.buffer().sample_unchecked(7, 7) == Sample::WHITE,
        "one past the image bottom-right",
    );

    // --- Test 3: preview buffer takes over, clearing restores ---
    state.set_preview(uniform_buffer(4, 4, Sample::opaque(200, 0, 0)));
    render(&state, &mut surface).expect("preview render");
    rp.check(
        surface.buffer().sample_unchecked(5, 5) == Sample::opaque(200, 0, 0),
        "preview should be displayed",
    );

    state.clear_preview();
    render(&state, &mut surface).expect("post-clear render");
    rp.compare_buffers(first.buffer(), surface.buffer());

    // --- Test 4: commit is the only promotion path ---
    state.set_preview(uniform_buffer(4, 4, Sample::opaque(0, 99, 0)));
    state.commit_preview();
    rp.check(
        state.committed().sample_unchecked(0, 0) == Sample::opaque(0, 99, 0),
        "commit_preview should replace the committed buffer",
    );
    rp.check(!state.has_preview(), "commit should consume the preview");

    // --- Test 5: pan shifts the rendered image ---
    let mut state = EditorState::new(committed.clone());
    state.toggle_hand();
    state.handle(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    state.handle(InputEvent::PointerMove { x: 2.0, y: 0.0 });
    state.handle(InputEvent::PointerUp);
    render(&state, &mut surface).expect("panned render");
    // Origin moves from (3,3) to (5,3).
    rp.check(
        surface.buffer().sample_unchecked(4, 5) == Sample::WHITE,
        "panned-away column should be background",
    );
    rp.check(
        surface.buffer().sample_unchecked(5, 5) == Sample::opaque(40, 80, 120),
        "image should follow the pan",
    );
    rp.check(
        surface.buffer().sample_unchecked(8, 5) == Sample::opaque(40, 80, 120),
        "image right edge should reach column 8",
    );
    // Resetting the pan restores the centered render.
    state.view_mut().set_pan(0.0, 0.0);
    render(&state, &mut surface).expect("reset render");
    rp.compare_buffers(first.buffer(), surface.buffer());

    // --- Test 6: logical resize resamples the active buffer ---
    let mut state = EditorState::new(quadrant_buffer());
    state.set_logical_size(4, 4).expect("logical size");
    let mut surface = DisplaySurface::new(4, 4).expect("tight surface");
    render(&state, &mut surface).expect("resized render");
    // 2x2 quadrants doubled to fill the 4x4 surface exactly.
    rp.check(
        surface.buffer().sample_unchecked(0, 0) == Sample::opaque(255, 0, 0),
        "red quadrant",
    );
    rp.check(
        surface.buffer().sample_unchecked(3, 0) == Sample::opaque(0, 255, 0),
        "green quadrant",
    );
    rp.check(
        surface.buffer().sample_unchecked(0, 3) == Sample::opaque(0, 0, 255),
        "blue quadrant",
    );
    rp.check(
        surface.buffer().sample_unchecked(3, 3) == Sample::WHITE,
        "white quadrant",
    );

    // --- Test 7: picking reads the rendered surface ---
    let picked = pick(&surface, 0, 0).expect("pick");
    rp.check(picked.sample == Sample::opaque(255, 0, 0), "picked sample");
    rp.check(pick(&surface, 4, 0).is_err(), "out-of-bounds pick accepted");

    let mut state = EditorState::new(quadrant_buffer());
    state.toggle_pipette();
    state.record_pick(picked);
    rp.check(
        state.primary_color() == Some(&picked),
        "primary slot should hold the pick",
    );
    state.handle(InputEvent::KeyDown(Key::SecondaryModifier));
    let second = pick(&surface, 3, 3).expect("second pick");
    state.record_pick(second);
    rp.check(
        state.secondary_color() == Some(&second),
        "secondary slot should hold the modifier pick",
    );

    // --- Test 8: fit scale stays inside the slider range ---
    rp.check(fit_scale(1, 1, 5000, 5000) == SCALE_MAX, "tiny image caps at max");
    rp.check(
        fit_scale(100_000, 100_000, 500, 500) == SCALE_MIN,
        "huge image floors at min",
    );
    let fitted = fit_scale(800, 600, 1024, 768);
    rp.check(
        (SCALE_MIN..=SCALE_MAX).contains(&fitted),
        "fit scale out of range",
    );

    assert!(rp.cleanup(), "viewport regression test failed");
}
