//! Unit tests for filter creation and plane dispositions.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::error::{CreateError, FormatError};
use super::instance::{ExprArgs, ExprFilter, PlaneProgram};
use crate::frame::{
    Clip, ColorFamily, Frame, MemoryClip, SampleType, VideoFormat, VideoInfo, presets,
};
use crate::parser::ParseError;
use crate::test_utils;

fn flat_clip(format: VideoFormat, width: usize, height: usize) -> Arc<dyn Clip> {
    Arc::new(MemoryClip::new(vec![Frame::new(format, width, height)]))
}

fn gray8() -> VideoFormat {
    VideoFormat::new(ColorFamily::Gray, SampleType::Integer, 8, 0, 0)
}

fn yuv420p8() -> VideoFormat {
    VideoFormat::new(ColorFamily::Yuv, SampleType::Integer, 8, 1, 1)
}

fn args(clips: Vec<Arc<dyn Clip>>, exprs: &[&str]) -> ExprArgs {
    ExprArgs {
        clips,
        expr: exprs.iter().map(|e| e.to_string()).collect(),
        format: None,
    }
}

/// A clip whose format varies per frame.
struct VariableClip(VideoInfo);

impl Clip for VariableClip {
    fn video_info(&self) -> &VideoInfo {
        &self.0
    }

    fn frame(&self, _n: usize) -> Frame {
        Frame::new(gray8(), 2, 2)
    }
}

// ============================================================================
// Clip validation
// ============================================================================

#[test]
fn test_rejects_empty_and_oversized_clip_lists() {
    assert_eq!(
        ExprFilter::new(args(vec![], &["x"])).unwrap_err(),
        CreateError::Format(FormatError::NoClips)
    );

    let clips: Vec<Arc<dyn Clip>> = (0..4).map(|_| flat_clip(gray8(), 2, 2)).collect();
    assert_eq!(
        ExprFilter::new(args(clips, &["x"])).unwrap_err(),
        CreateError::Format(FormatError::TooManyClips { given: 4 })
    );
}

#[test]
fn test_rejects_variable_format() {
    let variable: Arc<dyn Clip> = Arc::new(VariableClip(VideoInfo {
        format: None,
        width: 2,
        height: 2,
    }));
    assert_eq!(
        ExprFilter::new(args(vec![variable], &["x"])).unwrap_err(),
        CreateError::Format(FormatError::VariableFormat { clip: 0 })
    );
}

#[test]
fn test_rejects_dimension_mismatch() {
    let a = flat_clip(gray8(), 4, 4);
    let b = flat_clip(gray8(), 4, 2);
    assert_eq!(
        ExprFilter::new(args(vec![a, b], &["x y +"])).unwrap_err(),
        CreateError::Format(FormatError::Mismatched { clip: 1 })
    );
}

#[test]
fn test_rejects_subsampling_mismatch() {
    let a = flat_clip(yuv420p8(), 4, 4);
    let b = flat_clip(
        VideoFormat::new(ColorFamily::Yuv, SampleType::Integer, 8, 0, 0),
        4,
        4,
    );
    assert_eq!(
        ExprFilter::new(args(vec![a, b], &["x y +"])).unwrap_err(),
        CreateError::Format(FormatError::Mismatched { clip: 1 })
    );
}

#[test]
fn test_rejects_plane_count_mismatch_between_inputs() {
    let a = flat_clip(yuv420p8(), 4, 4);
    let b = flat_clip(gray8(), 4, 4);
    assert_eq!(
        ExprFilter::new(args(vec![a, b], &["x y +"])).unwrap_err(),
        CreateError::Format(FormatError::Mismatched { clip: 1 })
    );
}

#[test]
fn test_rejects_unsupported_depth() {
    let deep = flat_clip(
        VideoFormat::new(ColorFamily::Gray, SampleType::Integer, 17, 0, 0),
        2,
        2,
    );
    assert_eq!(
        ExprFilter::new(args(vec![deep], &["x"])).unwrap_err(),
        CreateError::Format(FormatError::UnsupportedDepth { clip: 0 })
    );

    let half = flat_clip(
        VideoFormat::new(ColorFamily::Gray, SampleType::Float, 16, 0, 0),
        2,
        2,
    );
    assert_eq!(
        ExprFilter::new(args(vec![half], &["x"])).unwrap_err(),
        CreateError::Format(FormatError::UnsupportedDepth { clip: 0 })
    );

    // Differing depths are fine as long as each is supported on its own.
    let a = flat_clip(gray8(), 2, 2);
    let b = flat_clip(
        VideoFormat::new(ColorFamily::Gray, SampleType::Integer, 16, 0, 0),
        2,
        2,
    );
    assert!(ExprFilter::new(args(vec![a, b], &["x y +"])).is_ok());
}

// ============================================================================
// Output format override
// ============================================================================

#[test]
fn test_format_override_changes_sample_layout_only() {
    test_utils::init_test_logging();

    let clip = flat_clip(yuv420p8(), 4, 4);
    let filter = ExprFilter::new(ExprArgs {
        clips: vec![clip],
        expr: vec!["x".to_string()],
        format: Some(presets::YUV444PS),
    })
    .unwrap();

    let info = filter.video_info();
    let format = info.format.unwrap();
    assert_eq!(format.sample_type, SampleType::Float);
    assert_eq!(format.bits_per_sample, 32);
    // Geometry still comes from the input.
    assert_eq!(format.sub_sampling_w, 1);
    assert_eq!(format.sub_sampling_h, 1);
}

#[test]
fn test_format_override_unknown_preset() {
    let clip = flat_clip(gray8(), 2, 2);
    assert_eq!(
        ExprFilter::new(ExprArgs {
            clips: vec![clip],
            expr: vec!["x".to_string()],
            format: Some(-7),
        })
        .unwrap_err(),
        CreateError::Format(FormatError::UnknownPreset { id: -7 })
    );
}

#[test]
fn test_format_override_rejects_compat_family() {
    let compat = flat_clip(
        VideoFormat::new(ColorFamily::Compat, SampleType::Integer, 8, 0, 0),
        2,
        2,
    );
    assert_eq!(
        ExprFilter::new(ExprArgs {
            clips: vec![compat],
            expr: vec!["x".to_string()],
            format: Some(presets::YUV444P8),
        })
        .unwrap_err(),
        CreateError::Format(FormatError::CompatFamily)
    );
}

#[test]
fn test_format_override_rejects_plane_count_change() {
    let clip = flat_clip(gray8(), 2, 2);
    assert_eq!(
        ExprFilter::new(ExprArgs {
            clips: vec![clip],
            expr: vec!["x".to_string()],
            format: Some(presets::YUV420P8),
        })
        .unwrap_err(),
        CreateError::Format(FormatError::PlaneCountMismatch)
    );
}

// ============================================================================
// Expressions and plane dispositions
// ============================================================================

#[test]
fn test_rejects_no_or_excess_expressions() {
    let clip = flat_clip(gray8(), 2, 2);
    assert_eq!(
        ExprFilter::new(args(vec![clip.clone()], &[])).unwrap_err(),
        CreateError::Format(FormatError::NoExpressions)
    );
    assert_eq!(
        ExprFilter::new(args(vec![clip], &["x", "x"])).unwrap_err(),
        CreateError::Format(FormatError::TooManyExpressions {
            given: 2,
            planes: 1
        })
    );
}

#[test]
fn test_parse_errors_carry_the_plane() {
    let clip = flat_clip(yuv420p8(), 4, 4);
    let err = ExprFilter::new(args(vec![clip], &["x", "x bogus +"])).unwrap_err();
    assert_eq!(
        err,
        CreateError::Parse {
            plane: 1,
            source: ParseError::BadLiteral {
                token: "bogus".to_string()
            }
        }
    );
}

#[test]
fn test_missing_input_surfaces_at_creation() {
    let clip = flat_clip(gray8(), 2, 2);
    let err = ExprFilter::new(args(vec![clip], &["x y +"])).unwrap_err();
    assert_eq!(
        err,
        CreateError::Parse {
            plane: 0,
            source: ParseError::MissingInput { name: 'y' }
        }
    );
}

#[test]
fn test_single_expression_expands_to_all_planes() {
    let clip = flat_clip(yuv420p8(), 4, 4);
    let filter = ExprFilter::new(args(vec![clip], &["x 1 +"])).unwrap();
    for plane in 0..3 {
        assert!(matches!(
            filter.plane_program(plane),
            PlaneProgram::Process(_)
        ));
    }
}

#[test]
fn test_two_expressions_reuse_second_for_third_plane() {
    let clip = flat_clip(yuv420p8(), 4, 4);
    let filter = ExprFilter::new(args(vec![clip], &["x 1 +", "x 2 *"])).unwrap();
    assert_eq!(filter.plane_program(1), filter.plane_program(2));
    assert!(matches!(filter.plane_program(0), PlaneProgram::Process(_)));
}

#[test]
fn test_empty_expression_copies_when_layout_matches() {
    let clip = flat_clip(yuv420p8(), 4, 4);
    let filter = ExprFilter::new(args(vec![clip], &["x 1 +", ""])).unwrap();
    assert!(matches!(filter.plane_program(0), PlaneProgram::Process(_)));
    assert_eq!(filter.plane_program(1), &PlaneProgram::Copy);
    assert_eq!(filter.plane_program(2), &PlaneProgram::Copy);
}

#[test]
fn test_blank_expression_is_not_process() {
    let clip = flat_clip(gray8(), 2, 2);
    let filter = ExprFilter::new(args(vec![clip], &["   "])).unwrap();
    assert_eq!(filter.plane_program(0), &PlaneProgram::Copy);
}

#[test]
fn test_empty_expression_is_undefined_when_layout_differs() {
    let clip = flat_clip(yuv420p8(), 4, 4);
    let filter = ExprFilter::new(ExprArgs {
        clips: vec![clip],
        expr: vec!["x".to_string(), "".to_string()],
        format: Some(presets::YUV444PS),
    })
    .unwrap();
    assert_eq!(filter.plane_program(1), &PlaneProgram::Undefined);
    assert_eq!(filter.plane_program(2), &PlaneProgram::Undefined);
}

#[test]
fn test_max_stack_depth_spans_planes() {
    let clip = flat_clip(yuv420p8(), 4, 4);
    let filter = ExprFilter::new(args(
        vec![clip],
        &["x 1 +", "x 128 > 255 0 ?", "x"],
    ))
    .unwrap();
    assert_eq!(filter.max_stack_depth(), 3);
}
