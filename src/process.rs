//! Read → filter → write for one image file.
//!
//! This is the orchestration around the filter core:
//!
//! ```text
//! input.ppm ── read ── decode ── step 1 … step N ── encode ── write ── output.ppm
//! ```
//!
//! Every step is one [`FilterKind`]. Before a downsample step the image size
//! is checked with [`can_downsample`]; too-small images skip the step and a
//! [`ProcessEvent::StepDeclined`] is reported instead. That is the only
//! decision made here. All other steps run through [`FilterKind::apply`]
//! exactly in the order given.
//!
//! Progress is reported through an optional `mpsc` sender so the CLI can
//! print while the run continues. Filters themselves always run on the
//! calling thread.

use crate::config::FilterConfig;
use crate::imaging::{
    CodecError, FilterKind, FilterSettings, ImageBuffer, PixmapCodec, PnmCodec, can_downsample,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::debug;

/// Notice attached to a downsample step that was skipped.
pub const TOO_SMALL_TO_COMPRESS: &str = "image too small to compress further";

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

/// What to process.
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub steps: Vec<FilterKind>,
    pub config: FilterConfig,
}

/// Progress event for one step.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// The input was read and decoded.
    Decoded {
        path: PathBuf,
        width: usize,
        height: usize,
    },
    /// A step ran; dimensions are those of its result.
    StepApplied {
        index: usize,
        filter: FilterKind,
        width: usize,
        height: usize,
    },
    /// A step was skipped because its precondition did not hold.
    StepDeclined {
        index: usize,
        filter: FilterKind,
        reason: String,
    },
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSummary {
    pub output: PathBuf,
    pub input_dimensions: (usize, usize),
    pub output_dimensions: (usize, usize),
    pub applied: usize,
    pub declined: usize,
}

pub fn process(
    request: &ProcessRequest,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessSummary, ProcessError> {
    let codec = PnmCodec::new(request.config.output.encoding);
    process_with_codec(&codec, request, events)
}

/// Process an image using a specific codec (allows testing with mock).
pub fn process_with_codec(
    codec: &impl PixmapCodec,
    request: &ProcessRequest,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessSummary, ProcessError> {
    let emit = |event: ProcessEvent| {
        if let Some(tx) = &events {
            // A dropped receiver only means nobody is listening.
            let _ = tx.send(event);
        }
    };

    let bytes = std::fs::read(&request.input).map_err(|source| ProcessError::Io {
        path: request.input.clone(),
        source,
    })?;
    let image = codec
        .decode(&bytes)
        .map_err(|source| ProcessError::Codec {
            path: request.input.clone(),
            source,
        })?;
    let input_dimensions = image.dimensions();
    debug!(
        path = %request.input.display(),
        width = input_dimensions.0,
        height = input_dimensions.1,
        "decoded input"
    );
    emit(ProcessEvent::Decoded {
        path: request.input.clone(),
        width: input_dimensions.0,
        height: input_dimensions.1,
    });

    let outcome = run_steps(image, &request.steps, &request.config.settings(), &emit);

    let encoded = codec
        .encode(&outcome.image)
        .map_err(|source| ProcessError::Codec {
            path: request.output.clone(),
            source,
        })?;
    std::fs::write(&request.output, encoded).map_err(|source| ProcessError::Io {
        path: request.output.clone(),
        source,
    })?;
    debug!(path = %request.output.display(), "wrote output");

    Ok(ProcessSummary {
        output: request.output.clone(),
        input_dimensions,
        output_dimensions: outcome.image.dimensions(),
        applied: outcome.applied,
        declined: outcome.declined,
    })
}

/// Result of running the step list over an in-memory image.
#[derive(Debug)]
pub struct StepOutcome {
    pub image: ImageBuffer,
    pub applied: usize,
    pub declined: usize,
}

/// Run `steps` in order, declining downsample steps on images that are too small.
pub fn run_steps(
    image: ImageBuffer,
    steps: &[FilterKind],
    settings: &FilterSettings,
    emit: &impl Fn(ProcessEvent),
) -> StepOutcome {
    let mut image = image;
    let mut applied = 0;
    let mut declined = 0;

    for (i, &filter) in steps.iter().enumerate() {
        let index = i + 1;
        if filter == FilterKind::Downsample && !can_downsample(&image) {
            debug!(index, %filter, width = image.width(), height = image.height(), "declined");
            declined += 1;
            emit(ProcessEvent::StepDeclined {
                index,
                filter,
                reason: TOO_SMALL_TO_COMPRESS.to_string(),
            });
            continue;
        }

        image = filter.apply(image, settings);
        applied += 1;
        debug!(index, %filter, width = image.width(), height = image.height(), "applied");
        emit(ProcessEvent::StepApplied {
            index,
            filter,
            width: image.width(),
            height: image.height(),
        });
    }

    StepOutcome {
        image,
        applied,
        declined,
    }
}

/// Read an input file's dimensions without filtering it.
pub fn identify(path: &Path) -> Result<(u32, u32), ProcessError> {
    let bytes = std::fs::read(path).map_err(|source| ProcessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dims = PnmCodec::default()
        .identify(&bytes)
        .map_err(|source| ProcessError::Codec {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((dims.width, dims.height))
}
