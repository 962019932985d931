//! Deterministic stand-ins for the external tools.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgba};

use crate::exec::{CommandOutput, CommandRunner};

/// One recorded invocation.
#[derive(Clone, Debug)]
pub(crate) struct Call {
    /// File name of the program, e.g. `msdfgen`.
    pub program: String,
    pub args: Vec<String>,
}

impl Call {
    /// The reference input passed to the renderer (`-svg`) or comparator.
    pub fn input(&self) -> Option<&str> {
        match self.program.as_str() {
            "compare" => self.args.get(4).map(String::as_str),
            _ => arg_after(&self.args, "-svg"),
        }
    }
}

fn arg_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let index = args.iter().position(|a| a == flag)?;
    args.get(index + 1).map(String::as_str)
}

/// Records every call and answers with `handler`.
pub(crate) struct FakeRunner<F> {
    pub calls: Vec<Call>,
    handler: F,
}

impl<F> FakeRunner<F>
where
    F: FnMut(&Call) -> io::Result<CommandOutput>,
{
    pub fn new(handler: F) -> Self {
        Self {
            calls: Vec::new(),
            handler,
        }
    }

    pub fn calls_to(&self, program: &str) -> Vec<&Call> {
        self.calls.iter().filter(|c| c.program == program).collect()
    }
}

impl<F> CommandRunner for FakeRunner<F>
where
    F: FnMut(&Call) -> io::Result<CommandOutput>,
{
    fn run(&mut self, program: &Path, args: &[OsString]) -> io::Result<CommandOutput> {
        let call = Call {
            program: program
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            args: args
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
        };
        let result = (self.handler)(&call);
        self.calls.push(call);
        result
    }
}

/// Write a blank `size × size` PNG to `path`.
pub(crate) fn write_png(path: &Path, size: u32) {
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(size, size);
    image.save(path).unwrap();
}

/// Handler emulating a working renderer, comparator and collage tool.
///
/// The renderer writes a correctly sized test render. Comparisons are
/// answered by `compare` with the input path of the job.
pub(crate) fn toolchain(
    mut compare: impl FnMut(&str) -> CommandOutput,
) -> impl FnMut(&Call) -> io::Result<CommandOutput> {
    move |call: &Call| match call.program.as_str() {
        "msdfgen" => {
            let index = call
                .args
                .iter()
                .position(|a| a == "-testrender")
                .unwrap();
            let size = call.args[index + 2].parse().unwrap();
            write_png(&PathBuf::from(&call.args[index + 1]), size);
            Ok(CommandOutput::new(0, "", ""))
        }
        "compare" if call.args == ["-version"] => {
            Ok(CommandOutput::new(0, "Version: ImageMagick 7.1.1-21 Q16-HDRI", ""))
        }
        "compare" => Ok(compare(call.input().unwrap())),
        "montage" => Ok(CommandOutput::new(0, "", "")),
        other => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{other}: not found"),
        )),
    }
}

/// Comparator answer for identical images.
pub(crate) fn identical() -> CommandOutput {
    CommandOutput::new(0, "", "")
}

/// Comparator answer for `pixels` differing pixels.
pub(crate) fn differing(pixels: u64) -> CommandOutput {
    CommandOutput::new(1, "", pixels.to_string())
}
