use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use qrcode::QrCode;
use qrcode::render::svg;
use uuid::Uuid;

use crate::error::AppError;

const QR_SIZE: u32 = 200;

/// Renders the guest invite link for `id` as an SVG QR code wrapped in a
/// data URL. Deterministic for a given base URL and id.
pub fn invitation_qr(base_url: &str, id: Uuid) -> Result<String, AppError> {
    let invite_url = format!("{}/invite/{}", base_url.trim_end_matches('/'), id);

    let svg_image = QrCode::new(invite_url.as_bytes())
        .map_err(|e| AppError::Internal(format!("QR generation failed: {e}")))?
        .render::<svg::Color>()
        .min_dimensions(QR_SIZE, QR_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(svg_image)
    ))
}
