// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldwork Render Opts: a flat namespace of render-option lookups.
//!
//! Pure lookup tables over video/audio codecs and their encoding options:
//! which codecs exist, which are audio-only, which container extension each
//! one produces, the valid constant-rate-factor (CRF) range and default per
//! codec, the supported pixel formats, and the ProRes encoder profiles.
//!
//! Everything here is a constant or a pure function — there is no state and
//! no configuration. Hosts use these tables to populate option pickers and
//! to derive numeric schemas for rate-factor fields:
//!
//! ```rust
//! use fieldwork_render_opts::{Codec, default_crf, valid_crf_range};
//!
//! let range = valid_crf_range(Codec::H264).unwrap();
//! assert_eq!((range.min, range.max), (1, 51));
//! assert_eq!(default_crf(Codec::H264), Some(18));
//!
//! // Audio codecs have no rate factor.
//! assert_eq!(valid_crf_range(Codec::Wav), None);
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// An output codec.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Codec {
    /// H.264 / AVC in an MP4 container.
    H264,
    /// H.265 / HEVC.
    H265,
    /// VP8 in a WebM container.
    Vp8,
    /// VP9 in a WebM container.
    Vp9,
    /// MP3 audio only.
    Mp3,
    /// AAC audio only.
    Aac,
    /// WAV audio only.
    Wav,
    /// Apple ProRes in a QuickTime container.
    ProRes,
    /// H.264 in a Matroska container.
    H264Mkv,
    /// Animated GIF.
    Gif,
}

/// Every codec an encoder run may target.
pub const VALID_CODECS: [Codec; 10] = [
    Codec::H264,
    Codec::H265,
    Codec::Vp8,
    Codec::Vp9,
    Codec::Mp3,
    Codec::Aac,
    Codec::Wav,
    Codec::ProRes,
    Codec::H264Mkv,
    Codec::Gif,
];

impl Codec {
    /// The codec's canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H264 => "h264",
            Self::H265 => "h265",
            Self::Vp8 => "vp8",
            Self::Vp9 => "vp9",
            Self::Mp3 => "mp3",
            Self::Aac => "aac",
            Self::Wav => "wav",
            Self::ProRes => "prores",
            Self::H264Mkv => "h264-mkv",
            Self::Gif => "gif",
        }
    }
}

/// Returns `true` for codecs that carry no video stream.
pub const fn is_audio_codec(codec: Codec) -> bool {
    matches!(codec, Codec::Mp3 | Codec::Aac | Codec::Wav)
}

/// The container file extension for output encoded with `codec`.
pub const fn file_extension(codec: Codec) -> &'static str {
    match codec {
        Codec::H264 => "mp4",
        Codec::H265 => "mkv",
        Codec::Vp8 | Codec::Vp9 => "webm",
        Codec::Mp3 => "mp3",
        Codec::Aac => "aac",
        Codec::Wav => "wav",
        Codec::ProRes => "mov",
        Codec::H264Mkv => "mkv",
        Codec::Gif => "gif",
    }
}

/// Inclusive range of valid constant-rate-factor values for a codec.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CrfRange {
    /// Lowest accepted CRF (highest quality).
    pub min: u32,
    /// Highest accepted CRF (lowest quality).
    pub max: u32,
}

/// The valid CRF range for `codec`, or `None` for codecs that do not use a
/// rate factor (audio codecs, ProRes, GIF).
pub const fn valid_crf_range(codec: Codec) -> Option<CrfRange> {
    match codec {
        Codec::H264 | Codec::H264Mkv => Some(CrfRange { min: 1, max: 51 }),
        Codec::H265 => Some(CrfRange { min: 0, max: 51 }),
        Codec::Vp8 => Some(CrfRange { min: 4, max: 63 }),
        Codec::Vp9 => Some(CrfRange { min: 0, max: 63 }),
        Codec::Mp3 | Codec::Aac | Codec::Wav | Codec::ProRes | Codec::Gif => None,
    }
}

/// The default CRF for `codec`, or `None` for codecs without a rate factor.
pub const fn default_crf(codec: Codec) -> Option<u32> {
    match codec {
        Codec::H264 | Codec::H264Mkv => Some(18),
        Codec::H265 => Some(23),
        Codec::Vp8 => Some(9),
        Codec::Vp9 => Some(28),
        Codec::Mp3 | Codec::Aac | Codec::Wav | Codec::ProRes | Codec::Gif => None,
    }
}

/// A pixel format accepted by the encoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 4:2:0 chroma subsampling, 8-bit.
    Yuv420p,
    /// 4:2:2 chroma subsampling, 8-bit.
    Yuv422p,
    /// 4:4:4 chroma subsampling, 8-bit.
    Yuv444p,
    /// 4:2:0 chroma subsampling, 10-bit.
    Yuv420p10le,
    /// 4:2:2 chroma subsampling, 10-bit.
    Yuv422p10le,
    /// 4:4:4 chroma subsampling, 10-bit.
    Yuv444p10le,
    /// 4:2:0 with alpha channel.
    Yuva420p,
}

/// Every pixel format the encoder accepts.
pub const VALID_PIXEL_FORMATS: [PixelFormat; 7] = [
    PixelFormat::Yuv420p,
    PixelFormat::Yuv422p,
    PixelFormat::Yuv444p,
    PixelFormat::Yuv420p10le,
    PixelFormat::Yuv422p10le,
    PixelFormat::Yuv444p10le,
    PixelFormat::Yuva420p,
];

/// The pixel format used when none is configured.
pub const DEFAULT_PIXEL_FORMAT: PixelFormat = PixelFormat::Yuv420p;

impl PixelFormat {
    /// The format's canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yuv420p => "yuv420p",
            Self::Yuv422p => "yuv422p",
            Self::Yuv444p => "yuv444p",
            Self::Yuv420p10le => "yuv420p10le",
            Self::Yuv422p10le => "yuv422p10le",
            Self::Yuv444p10le => "yuv444p10le",
            Self::Yuva420p => "yuva420p",
        }
    }
}

/// An Apple ProRes encoder profile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProResProfile {
    /// ProRes 4444 XQ.
    Profile4444Xq,
    /// ProRes 4444.
    Profile4444,
    /// ProRes 422 HQ.
    Hq,
    /// ProRes 422.
    Standard,
    /// ProRes 422 LT.
    Light,
    /// ProRes 422 Proxy.
    Proxy,
}

/// Every selectable ProRes profile.
pub const PRO_RES_PROFILE_OPTIONS: [ProResProfile; 6] = [
    ProResProfile::Profile4444Xq,
    ProResProfile::Profile4444,
    ProResProfile::Hq,
    ProResProfile::Standard,
    ProResProfile::Light,
    ProResProfile::Proxy,
];

impl ProResProfile {
    /// The profile's canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile4444Xq => "4444-xq",
            Self::Profile4444 => "4444",
            Self::Hq => "hq",
            Self::Standard => "standard",
            Self::Light => "light",
            Self::Proxy => "proxy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_codec_has_an_extension_and_a_name() {
        for codec in VALID_CODECS {
            assert!(!file_extension(codec).is_empty(), "missing extension");
            assert!(!codec.as_str().is_empty(), "missing name");
        }
    }

    #[test]
    fn crf_defaults_sit_inside_their_valid_range() {
        for codec in VALID_CODECS {
            match (default_crf(codec), valid_crf_range(codec)) {
                (Some(default), Some(range)) => {
                    assert!(range.min <= range.max, "inverted range");
                    assert!(
                        range.min <= default && default <= range.max,
                        "default outside range"
                    );
                }
                (None, None) => {}
                (default, range) => {
                    panic!("codec {codec:?} has mismatched crf tables: {default:?} vs {range:?}")
                }
            }
        }
    }

    #[test]
    fn audio_codecs_have_no_rate_factor() {
        for codec in VALID_CODECS {
            if is_audio_codec(codec) {
                assert_eq!(valid_crf_range(codec), None, "audio codec with crf");
                assert_eq!(default_crf(codec), None, "audio codec with crf default");
            }
        }
    }

    #[test]
    fn audio_predicate_matches_the_audio_codecs() {
        assert!(is_audio_codec(Codec::Mp3));
        assert!(is_audio_codec(Codec::Aac));
        assert!(is_audio_codec(Codec::Wav));
        assert!(!is_audio_codec(Codec::H264));
        assert!(!is_audio_codec(Codec::Gif));
    }

    #[test]
    fn default_pixel_format_is_listed() {
        assert!(VALID_PIXEL_FORMATS.contains(&DEFAULT_PIXEL_FORMAT));
        assert_eq!(DEFAULT_PIXEL_FORMAT.as_str(), "yuv420p");
    }

    #[test]
    fn prores_profile_names_are_unique() {
        for (i, a) in PRO_RES_PROFILE_OPTIONS.iter().enumerate() {
            for b in &PRO_RES_PROFILE_OPTIONS[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "duplicate profile name");
            }
        }
    }
}
