//! Video formats and stream descriptions.

use hashbrown::HashMap;
use lazy_static::lazy_static;

/// Whether a plane stores integer or floating point samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    Integer,
    Float,
}

/// Color family of a format. Determines the plane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFamily {
    Gray,
    Rgb,
    Yuv,
    /// Packed legacy formats. Accepted as input, never as an output
    /// override target.
    Compat,
}

/// Sample layout and plane geometry of one pixel format.
///
/// Chroma subsampling is expressed as right-shifts applied to the luma
/// dimensions: plane 0 is full size, planes 1 and 2 are `width >>
/// sub_sampling_w` by `height >> sub_sampling_h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoFormat {
    pub color_family: ColorFamily,
    pub sample_type: SampleType,
    pub bits_per_sample: u32,
    pub bytes_per_sample: usize,
    pub sub_sampling_w: u32,
    pub sub_sampling_h: u32,
    pub num_planes: usize,
}

impl VideoFormat {
    /// Describe a format. Bytes per sample and plane count are derived:
    /// 1 byte for 8-bit integers, 2 for 9-16 bit, 4 for float; one plane
    /// for gray, three otherwise.
    pub fn new(
        color_family: ColorFamily,
        sample_type: SampleType,
        bits_per_sample: u32,
        sub_sampling_w: u32,
        sub_sampling_h: u32,
    ) -> Self {
        let bytes_per_sample = match sample_type {
            SampleType::Integer if bits_per_sample <= 8 => 1,
            SampleType::Integer => 2,
            SampleType::Float => 4,
        };
        let num_planes = match color_family {
            ColorFamily::Gray => 1,
            _ => 3,
        };
        Self {
            color_family,
            sample_type,
            bits_per_sample,
            bytes_per_sample,
            sub_sampling_w,
            sub_sampling_h,
            num_planes,
        }
    }

    /// 8-16 bit integer or 32 bit float.
    pub fn has_supported_depth(&self) -> bool {
        match self.sample_type {
            SampleType::Integer => (8..=16).contains(&self.bits_per_sample),
            SampleType::Float => self.bits_per_sample == 32,
        }
    }

    /// Derive a format keeping this family and subsampling but with a
    /// different sample layout. Used when an output preset overrides the
    /// sample type or bit depth of input 0's format.
    pub fn with_sample_layout(&self, sample_type: SampleType, bits_per_sample: u32) -> Self {
        Self::new(
            self.color_family,
            sample_type,
            bits_per_sample,
            self.sub_sampling_w,
            self.sub_sampling_h,
        )
    }
}

/// Resolution and format of a video stream.
///
/// `format: None` models streams whose format varies per frame; those are
/// rejected at filter creation, as are zero dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoInfo {
    pub format: Option<VideoFormat>,
    pub width: usize,
    pub height: usize,
}

impl VideoInfo {
    pub fn new(format: VideoFormat, width: usize, height: usize) -> Self {
        Self {
            format: Some(format),
            width,
            height,
        }
    }

    /// Whether the stream has one fixed format and resolution.
    pub fn is_constant(&self) -> bool {
        self.format.is_some() && self.width > 0 && self.height > 0
    }
}

/// Integer ids for the built-in format presets, usable as the `format`
/// creation parameter.
pub mod presets {
    pub const GRAY8: i32 = 1000;
    pub const GRAY16: i32 = 1001;
    pub const GRAYS: i32 = 1002;

    pub const YUV420P8: i32 = 2000;
    pub const YUV422P8: i32 = 2001;
    pub const YUV444P8: i32 = 2002;
    pub const YUV420P10: i32 = 2003;
    pub const YUV420P16: i32 = 2004;
    pub const YUV444P16: i32 = 2005;
    pub const YUV444PS: i32 = 2006;

    pub const RGB24: i32 = 3000;
    pub const RGB48: i32 = 3001;
    pub const RGBS: i32 = 3002;
}

lazy_static! {
    static ref PRESET_TABLE: HashMap<i32, VideoFormat> = {
        use ColorFamily::*;
        use SampleType::*;

        let mut table = HashMap::new();
        table.insert(presets::GRAY8, VideoFormat::new(Gray, Integer, 8, 0, 0));
        table.insert(presets::GRAY16, VideoFormat::new(Gray, Integer, 16, 0, 0));
        table.insert(presets::GRAYS, VideoFormat::new(Gray, Float, 32, 0, 0));

        table.insert(presets::YUV420P8, VideoFormat::new(Yuv, Integer, 8, 1, 1));
        table.insert(presets::YUV422P8, VideoFormat::new(Yuv, Integer, 8, 1, 0));
        table.insert(presets::YUV444P8, VideoFormat::new(Yuv, Integer, 8, 0, 0));
        table.insert(presets::YUV420P10, VideoFormat::new(Yuv, Integer, 10, 1, 1));
        table.insert(presets::YUV420P16, VideoFormat::new(Yuv, Integer, 16, 1, 1));
        table.insert(presets::YUV444P16, VideoFormat::new(Yuv, Integer, 16, 0, 0));
        table.insert(presets::YUV444PS, VideoFormat::new(Yuv, Float, 32, 0, 0));

        table.insert(presets::RGB24, VideoFormat::new(Rgb, Integer, 8, 0, 0));
        table.insert(presets::RGB48, VideoFormat::new(Rgb, Integer, 16, 0, 0));
        table.insert(presets::RGBS, VideoFormat::new(Rgb, Float, 32, 0, 0));
        table
    };
}

/// Look up a built-in format preset.
pub fn preset(id: i32) -> Option<VideoFormat> {
    PRESET_TABLE.get(&id).copied()
}
