use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary PPM: the `P6` header followed by the raw RGB bytes.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    // P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        write_ppm(buffer, &mut writer)?;
        writer.flush()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one() -> PixelBuffer {
        PixelBuffer::from_data(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap()
    }

    #[test]
    fn test_write_ppm_emits_header_then_pixels() {
        let mut out = Vec::new();

        write_ppm(&two_by_one(), &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("mandelbrot_ppm_{}", std::process::id()));
        let filepath = dir.join("nested").join("frame.ppm");

        PpmFilePresenter::new()
            .present(&two_by_one(), &filepath)
            .unwrap();

        let written = fs::read(&filepath).unwrap();
        assert!(written.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(written.len(), 11 + 6);

        fs::remove_dir_all(dir).unwrap();
    }
}
