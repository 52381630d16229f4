pub use crate::{config::DirectivityConfig, error::RoomDirError};

pub use roomdir_core::{
    common::{deg, kHz, rad, wrap_degrees, wrap_radians, Angle, Freq, Hz, PI},
    directivity::{
        cardioid_response, CardioidFamily, CardioidOption, Directivity, DirectivityPattern,
        ResponseQuery,
    },
    error::DirectivityError,
    geometry::{spher2cart, DirectionVector, UnitVector3, Vector3},
    shoebox::{image_source_angles, ImageSourceAngles},
};

pub use roomdir_speech::{
    SpeechDataError, SpeechDirectivity, SpeechDirectivityOption, SpeechDirectivityTable,
};
