//! Filter creation and instance state.

use std::sync::Arc;

use tracing::debug;

use super::error::{CreateError, FormatError};
use crate::frame::{Clip, ColorFamily, VideoFormat, VideoInfo, preset};
use crate::optimizer::fold_constants;
use crate::parser::{self, Program};
use crate::vm::Op;

/// The creation parameter bag.
pub struct ExprArgs {
    /// Input streams, addressed as `x`, `y` and `z` in expressions. One to
    /// three; all must match input 0 in dimensions, plane count and
    /// subsampling.
    pub clips: Vec<Arc<dyn Clip>>,

    /// Per-plane expressions, at most one per output plane. A single
    /// expression applies to every plane; with two, the third plane reuses
    /// the second. An empty string copies the plane from input 0 when the
    /// sample layouts match and leaves it undefined otherwise.
    pub expr: Vec<String>,

    /// Optional format preset id overriding the output sample type and bit
    /// depth. Plane count and subsampling always come from input 0.
    pub format: Option<i32>,
}

/// Disposition of one output plane.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneProgram {
    /// Evaluate a compiled expression per pixel.
    Process(Program),
    /// Propagate the plane from input 0 untouched.
    Copy,
    /// The plane exists but its content is unspecified (zeroed buffer).
    Undefined,
}

/// A compiled per-pixel expression filter.
///
/// Everything in here is immutable after creation: the op streams, the
/// output format and the input handles. Rendering allocates only per-call
/// scratch, so one instance can serve many threads.
pub struct ExprFilter {
    pub(super) clips: Vec<Arc<dyn Clip>>,
    pub(super) format: VideoFormat,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) programs: [PlaneProgram; 3],
    pub(super) max_stack_depth: usize,
}

impl std::fmt::Debug for ExprFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExprFilter")
            .field("clips", &self.clips.len())
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("programs", &self.programs)
            .field("max_stack_depth", &self.max_stack_depth)
            .finish()
    }
}

impl ExprFilter {
    /// Build a filter instance from the creation parameter bag.
    ///
    /// All validation happens here, synchronously: clip formats, the output
    /// override, and every expression. After a successful return the filter
    /// cannot fail at runtime.
    pub fn new(args: ExprArgs) -> Result<Self, CreateError> {
        if args.clips.is_empty() {
            return Err(FormatError::NoClips.into());
        }
        if args.clips.len() > 3 {
            return Err(FormatError::TooManyClips {
                given: args.clips.len(),
            }
            .into());
        }

        let reference: VideoInfo = *args.clips[0].video_info();
        let mut formats: Vec<VideoFormat> = Vec::with_capacity(args.clips.len());
        for (i, clip) in args.clips.iter().enumerate() {
            let vi = clip.video_info();
            let Some(format) = vi.format else {
                return Err(FormatError::VariableFormat { clip: i }.into());
            };
            if vi.width == 0 || vi.height == 0 {
                return Err(FormatError::VariableFormat { clip: i }.into());
            }
            if i > 0
                && (format.num_planes != formats[0].num_planes
                    || format.sub_sampling_w != formats[0].sub_sampling_w
                    || format.sub_sampling_h != formats[0].sub_sampling_h
                    || vi.width != reference.width
                    || vi.height != reference.height)
            {
                return Err(FormatError::Mismatched { clip: i }.into());
            }
            if !format.has_supported_depth() {
                return Err(FormatError::UnsupportedDepth { clip: i }.into());
            }
            formats.push(format);
        }
        let base = formats[0];

        let mut out_format = base;
        if let Some(id) = args.format {
            let Some(requested) = preset(id) else {
                return Err(FormatError::UnknownPreset { id }.into());
            };
            if out_format.color_family == ColorFamily::Compat {
                return Err(FormatError::CompatFamily.into());
            }
            if requested.num_planes != out_format.num_planes {
                return Err(FormatError::PlaneCountMismatch.into());
            }
            out_format =
                out_format.with_sample_layout(requested.sample_type, requested.bits_per_sample);
        }

        if args.expr.is_empty() {
            return Err(FormatError::NoExpressions.into());
        }
        if args.expr.len() > out_format.num_planes {
            return Err(FormatError::TooManyExpressions {
                given: args.expr.len(),
                planes: out_format.num_planes,
            }
            .into());
        }

        let mut expr: [String; 3] = Default::default();
        for (i, e) in args.expr.iter().enumerate() {
            expr[i] = e.clone();
        }
        match args.expr.len() {
            1 => {
                expr[1] = expr[0].clone();
                expr[2] = expr[0].clone();
            }
            2 => {
                expr[2] = expr[1].clone();
            }
            _ => {}
        }

        let mut load_ops: [Option<Op>; 3] = [None, None, None];
        for (i, format) in formats.iter().enumerate() {
            load_ops[i] = Some(parser::load_op(format, i as u8));
        }
        let store = parser::store_op(&out_format);

        let mut programs: [PlaneProgram; 3] =
            std::array::from_fn(|_| PlaneProgram::Undefined);
        let mut max_stack_depth = 0;
        for plane in 0..out_format.num_planes {
            let mut program = parser::parse_expression(&expr[plane], &load_ops, store)
                .map_err(|source| CreateError::Parse { plane, source })?;

            if program.ops.is_empty() {
                let copyable = out_format.bits_per_sample == base.bits_per_sample
                    && out_format.sample_type == base.sample_type;
                programs[plane] = if copyable {
                    PlaneProgram::Copy
                } else {
                    PlaneProgram::Undefined
                };
                debug!(plane, copyable, "plane has no expression");
                continue;
            }

            let parsed_ops = program.ops.len();
            fold_constants(&mut program.ops);
            debug!(
                plane,
                parsed_ops,
                folded_ops = program.ops.len(),
                max_stack_depth = program.max_stack_depth,
                "compiled plane expression"
            );
            max_stack_depth = max_stack_depth.max(program.max_stack_depth);
            programs[plane] = PlaneProgram::Process(program);
        }

        Ok(Self {
            clips: args.clips,
            format: out_format,
            width: reference.width,
            height: reference.height,
            programs,
            max_stack_depth,
        })
    }

    /// The output stream description.
    pub fn video_info(&self) -> VideoInfo {
        VideoInfo::new(self.format, self.width, self.height)
    }

    /// Disposition and compiled program of one output plane.
    pub fn plane_program(&self, plane: usize) -> &PlaneProgram {
        &self.programs[plane]
    }

    /// Peak operand-stack depth across all plane programs.
    pub fn max_stack_depth(&self) -> usize {
        self.max_stack_depth
    }
}
