use glam::Vec2;
use particles_core::Sensitivity;
use web_sys as web;

// ---------------- Pointer mapping ----------------

/// Map a client-space point into canvas backing pixels through the canvas's
/// on-screen rect. A collapsed rect falls back to the CSS offset.
#[inline]
pub fn client_to_canvas_px(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    let css = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        css / rect_size * backing
    } else {
        css
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

// ---------------- Control values ----------------

/// Slider text to sensitivity; unreadable input behaves like the slider default.
#[inline]
pub fn parse_sensitivity(raw: &str) -> Sensitivity {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Sensitivity::from_slider(v),
        _ => Sensitivity::default(),
    }
}

#[inline]
pub fn parse_particle_count(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}
