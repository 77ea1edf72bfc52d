//! Per-frame rendering.

use tracing::trace;

use super::instance::{ExprFilter, PlaneProgram};
use crate::frame::Frame;
use crate::vm::{OperandStack, eval_pixel};

impl ExprFilter {
    /// Render output frame `n`, fetching frame `n` from every input clip.
    pub fn get_frame(&self, n: usize) -> Frame {
        let frames: Vec<Frame> = self.clips.iter().map(|clip| clip.frame(n)).collect();
        let out = self.render(&frames[0], frames.get(1), frames.get(2));
        trace!(frame = n, "rendered frame");
        out
    }

    /// Render one output frame from already-fetched input frames.
    ///
    /// Copy planes are initialized from `src0`, process planes are evaluated
    /// pixel by pixel, undefined planes stay zeroed. Pixel and plane order
    /// is unobservable; any two pixels are independent.
    pub fn render(&self, src0: &Frame, src1: Option<&Frame>, src2: Option<&Frame>) -> Frame {
        let sources: [Option<&Frame>; 3] = [Some(src0), src1, src2];
        let mut dst = Frame::new(self.format, self.width, self.height);
        let mut stack = OperandStack::new(self.max_stack_depth);

        for plane in 0..self.format.num_planes {
            match &self.programs[plane] {
                PlaneProgram::Process(program) => {
                    let width = dst.plane_width(plane);
                    let height = dst.plane_height(plane);
                    for y in 0..height {
                        let rows: [&[u8]; 3] = std::array::from_fn(|c| {
                            sources[c].map_or(&[][..], |frame| frame.row(plane, y))
                        });
                        let dst_row = dst.row_mut(plane, y);
                        for x in 0..width {
                            eval_pixel(&program.ops, x, &rows, dst_row, stack.slots());
                        }
                    }
                }
                PlaneProgram::Copy => dst.copy_plane_from(src0, plane),
                PlaneProgram::Undefined => {}
            }
        }

        dst
    }
}
