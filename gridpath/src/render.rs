use std::time::Duration;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use tracing::debug;

use crate::{Board, Cell, Coord, RenderConfig, RenderError};

fn rgba([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Pixel dimensions of a frame for `board`.
pub fn frame_size(board: &Board, config: &RenderConfig) -> Result<(u32, u32), RenderError> {
    if config.cell_size == 0 {
        return Err(RenderError::InvalidConfig("cell_size must be positive"));
    }
    let side = |cells: usize| -> Option<u32> {
        u32::try_from(cells)
            .ok()?
            .checked_mul(config.cell_size)?
            .checked_add(config.margin.checked_mul(2)?)
    };
    match (side(board.grid.width()), side(board.grid.height())) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(RenderError::InvalidConfig("frame size overflows")),
    }
}

struct Painter<'a> {
    config: &'a RenderConfig,
}

impl<'a> Painter<'a> {
    /// Top-left pixel of a cell.
    fn origin(&self, coord: Coord) -> (u32, u32) {
        let cell_size = self.config.cell_size;
        (
            self.config.margin + coord.x as u32 * cell_size,
            self.config.margin + coord.y as u32 * cell_size,
        )
    }

    fn fill_cell(&self, img: &mut RgbaImage, coord: Coord, color: Rgba<u8>) {
        let (x0, y0) = self.origin(coord);
        let cell_size = self.config.cell_size;
        for y in y0..y0 + cell_size {
            for x in x0..x0 + cell_size {
                img.put_pixel(x, y, color);
            }
        }
    }

    /// Fills the circle inscribed in a cell.
    fn fill_disc(&self, img: &mut RgbaImage, coord: Coord, color: Rgba<u8>) {
        let (x0, y0) = self.origin(coord);
        let cell_size = self.config.cell_size;
        let radius = f64::from(cell_size) / 2.0;
        for y in y0..y0 + cell_size {
            for x in x0..x0 + cell_size {
                // Measured from the pixel center
                let dx = f64::from(x - x0) + 0.5 - radius;
                let dy = f64::from(y - y0) + 0.5 - radius;
                if dx * dx + dy * dy <= radius * radius {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }
}

/// Draws one frame per path step, lazily.
///
/// All frames show the walls, the start and the goal; frame `i` additionally
/// marks `path[i]`. Only the background and the frame being produced are
/// held in memory.
pub fn render_frames<'a>(
    board: &Board,
    path: &'a [Coord],
    config: &'a RenderConfig,
) -> Result<impl Iterator<Item = RgbaImage> + 'a, RenderError> {
    let (width, height) = frame_size(board, config)?;
    let painter = Painter { config };
    let palette = &config.palette;

    let mut background = RgbaImage::from_pixel(width, height, rgba(palette.background));
    for (coord, cell) in board.grid.iter() {
        if cell == Cell::Wall {
            painter.fill_cell(&mut background, coord, rgba(palette.wall));
        }
    }
    painter.fill_disc(&mut background, board.start, rgba(palette.start));
    painter.fill_disc(&mut background, board.goal, rgba(palette.goal));

    let current = rgba(palette.current);
    Ok(path.iter().map(move |&step| {
        let mut frame = background.clone();
        painter.fill_disc(&mut frame, step, current);
        frame
    }))
}

/// Encodes frames as a looping GIF animation.
///
/// Frames are consumed one at a time as they are encoded.
pub fn encode_gif(
    frames: impl IntoIterator<Item = RgbaImage>,
    config: &RenderConfig,
) -> Result<Vec<u8>, RenderError> {
    let mut frames = frames.into_iter().peekable();
    if frames.peek().is_none() {
        return Err(RenderError::EmptyPath);
    }
    let delay = Delay::from_saturating_duration(Duration::from_millis(config.frame_delay_ms.into()));
    let mut num_frames = 0usize;

    let mut bytes = Vec::new();
    {
        // The trailer is written when the encoder is dropped
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder.set_repeat(Repeat::Infinite)?;
        encoder.encode_frames(frames.map(|buffer| {
            num_frames += 1;
            Frame::from_parts(buffer, 0, 0, delay)
        }))?;
    }
    debug!(num_frames, num_bytes = bytes.len(), "Encoded GIF");
    Ok(bytes)
}

/// Renders the path on the board as a GIF, one frame per step.
pub fn render_gif(
    board: &Board,
    path: &[Coord],
    config: &RenderConfig,
) -> Result<Vec<u8>, RenderError> {
    encode_gif(render_frames(board, path, config)?, config)
}
