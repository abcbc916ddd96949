use std::io::Cursor;

use egui::Vec2;
use image::{ImageFormat, RgbaImage};

use crate::command::CommandLog;
use crate::error::ExportError;
use crate::renderer::Renderer;
use crate::surface::{RasterSurface, ScaledSurface};

pub type ExportResult<T> = Result<T, ExportError>;

/// An encoded PNG of the drawing, ready to be saved or downloaded
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Render the committed drawables at `scale` onto a transparent image of
/// `canvas_size * scale` pixels.
pub fn render_export(log: &CommandLog, canvas_size: Vec2, scale: f32) -> ExportResult<RgbaImage> {
    let width = (canvas_size.x * scale).round();
    let height = (canvas_size.y * scale).round();
    if !(width >= 1.0 && height >= 1.0) {
        return Err(ExportError::EmptyCanvas);
    }

    let mut raster = RasterSurface::new(width as u32, height as u32);
    {
        let mut scaled = ScaledSurface::new(&mut raster, scale);
        Renderer::compose(&mut scaled, log);
    }
    Ok(raster.into_image())
}

pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

impl ExportArtifact {
    pub fn new(file_name: impl Into<String>, image: &RgbaImage) -> ExportResult<Self> {
        Ok(Self {
            file_name: file_name.into(),
            width: image.width(),
            height: image.height(),
            png: encode_png(image)?,
        })
    }

    /// Write the PNG into `dir`, returning the full path
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, dir: &std::path::Path) -> ExportResult<std::path::PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png)?;
        log::info!(
            "Exported {}x{} drawing to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(path)
    }

    /// Offer the PNG to the browser as a file download
    #[cfg(target_arch = "wasm32")]
    pub fn download(&self) -> ExportResult<()> {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let js_err = |err: wasm_bindgen::JsValue| ExportError::Download(format!("{err:?}"));

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

        let bytes = js_sys::Uint8Array::from(self.png.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| ExportError::Download("anchor element has the wrong type".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(&self.file_name);
        anchor.click();
        Url::revoke_object_url(&url).map_err(js_err)?;

        log::info!("Offered {} ({} bytes) for download", self.file_name, self.png.len());
        Ok(())
    }
}
