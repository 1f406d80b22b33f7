use std::{path::{Path, PathBuf}, process::ExitCode};

use argh::FromArgs;
use image::RgbaImage;
use lcr_font_core::{EncodeError, EncodedFont, PixelSource, emit, encode};
use log::{error, info};

use crate::std_fs::StdFileWriter;

mod preview;
mod std_fs;

#[derive(FromArgs)]
/// Convert a bitmap, preferably in the ppm format, into a C source file for the LCR meter.
/// The width of the image must be divisible by the number of characters,
/// for example: img2c "0123456789-." font24x20.ppm font24x20.c
struct Args {
    /// characters in the image, left to right
    #[argh(positional)]
    characters: String,

    /// bitmap image file
    #[argh(positional)]
    image: String,

    /// output C file
    #[argh(positional)]
    output: String,

    /// array name, defaults to the image file name without extension
    #[argh(option)]
    name: Option<String>,

    /// also draw the font into this PNG file
    #[argh(option)]
    preview: Option<String>,

    /// text for the preview, defaults to the character string
    #[argh(option)]
    preview_text: Option<String>,
}

#[derive(Debug)]
enum ToolError {
    ImageNotFound(PathBuf),
    InvalidName(String),
    Decode(image::ImageError),
    Preview(image::ImageError),
    Encode(EncodeError),
    Io(std::io::Error),
}

impl From<image::ImageError> for ToolError {
    fn from(err: image::ImageError) -> Self {
        ToolError::Decode(err)
    }
}

impl From<EncodeError> for ToolError {
    fn from(err: EncodeError) -> Self {
        ToolError::Encode(err)
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::Io(err)
    }
}

impl core::fmt::Display for ToolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ToolError::ImageNotFound(path) => write!(f, "bitmap image {} not found", path.display()),
            ToolError::InvalidName(name) => write!(f, "{name:?} is not a valid C identifier"),
            ToolError::Decode(err) => write!(f, "failed to decode image: {err}"),
            ToolError::Preview(err) => write!(f, "failed to save preview: {err}"),
            ToolError::Encode(err) => write!(f, "{err}"),
            ToolError::Io(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

/// RGBA image as seen by the encoder, alpha dropped.
struct ImagePixels(RgbaImage);

impl PixelSource for ImagePixels {
    fn width(&self) -> usize {
        self.0.width() as usize
    }

    fn height(&self) -> usize {
        self.0.height() as usize
    }

    fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let [r, g, b, _] = self.0.get_pixel(x as u32, y as u32).0;
        [r, g, b]
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => {
            info!("ready!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ToolError> {
    info!("number of characters to process: {}", args.characters.chars().count());
    info!("image to process: {}", args.image);
    info!("output file: {}", args.output);

    let name = match &args.name {
        Some(name) if !emit::is_identifier(name) => return Err(ToolError::InvalidName(name.clone())),
        Some(name) => name.clone(),
        None => emit::identifier_from_path(&args.image),
    };

    let font = load_font(&args.characters, Path::new(&args.image))?;

    let mut out = StdFileWriter::create(Path::new(&args.output))?;
    emit::write_source(&mut out, &name, &font)?;
    drop(out);
    info!("Wrote {} glyphs as {name}", font.glyphs.len());

    if let Some(preview) = &args.preview {
        let text = args.preview_text.as_deref().unwrap_or(&args.characters);
        preview::save(&font, text, Path::new(preview)).map_err(ToolError::Preview)?;
    }
    Ok(())
}

/// Decodes and encodes the image without touching any output.
fn load_font(characters: &str, image_path: &Path) -> Result<EncodedFont, ToolError> {
    if !image_path.exists() {
        return Err(ToolError::ImageNotFound(image_path.to_path_buf()));
    }
    let image = image::open(image_path)?.into_rgba8();
    info!("image width = {}, height = {}", image.width(), image.height());
    Ok(encode(characters, &ImagePixels(image))?)
}
