/// Borrowed view over one interleaved color frame.
///
/// `data` is row-major with `channels` bytes per pixel, so
/// `data.len() == width * height * channels`. The pipeline itself only
/// reads the dimensions; the pixel data is handed to the segmentation
/// backend untouched.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data: &'a [u8],
}

impl<'a> FrameView<'a> {
    pub fn new(width: usize, height: usize, channels: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }
}
