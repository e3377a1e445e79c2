//! Conversion of libheif `snake_case` identifiers into Go identifiers.
//!
//! The conversion is a fixed pipeline of small steps:
//!
//! 1. strip the `heif_` library prefix
//! 2. split on `_`
//! 3. capitalise the words, keeping acronym-like trailing words verbatim
//! 4. drop a trailing word that repeats the first one (members only)
//! 5. rewrite a trailing `Ok` to `OK` (members only)
//! 6. concatenate
//!
//! ```ignore
//! use heifdefs::codegen::transcode::transcode;
//!
//! assert_eq!(transcode("heif_error_Ok"), "ErrorOK");
//! assert_eq!(transcode("heif_chroma_interleaved_RRGGBB_BE"), "ChromaInterleavedRRGGBB_BE");
//! ```

/// Prefix shared by every public libheif identifier
pub const LIBRARY_PREFIX: &str = "heif_";

/// Convert an enum member name, e.g. `heif_error_Usage_error` -> `ErrorUsage`
pub fn transcode(raw: &str) -> String {
    let words = apply_casing(&split_words(strip_library_prefix(raw)));
    let words = fix_ok_suffix(drop_repeated_suffix(words));
    words.concat()
}

/// Convert an enum type name, e.g. `heif_error_code` -> `ErrorCode`
///
/// Type names only get the casing rules; the member-specific suffix rewrites
/// are not applied.
pub fn transcode_type_name(raw: &str) -> String {
    apply_casing(&split_words(strip_library_prefix(raw))).concat()
}

pub fn strip_library_prefix(raw: &str) -> &str {
    raw.strip_prefix(LIBRARY_PREFIX).unwrap_or(raw)
}

pub fn split_words(name: &str) -> Vec<&str> {
    name.split('_').collect()
}

/// A word with more than one uppercase ASCII letter (`AV1`, `RGB`, `YCbCr`, `BE`)
pub fn is_acronym_like(word: &str) -> bool {
    word.chars().filter(char::is_ascii_uppercase).count() > 1
}

/// Uppercase the first character and leave the rest alone, then spell `Av1` as `AV1`
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };
    capitalized.replace("Av1", "AV1")
}

/// Capitalise every word, preserving acronym-like trailing words.
///
/// When the last two words are both acronym-like they are kept verbatim and
/// joined with `_` (`RRGGBB`, `BE` -> `RRGGBB_BE`). When only the last word is
/// acronym-like it is kept verbatim. The second-to-last word is only
/// considered when there are more than two words.
pub fn apply_casing(words: &[&str]) -> Vec<String> {
    let Some((&last, init)) = words.split_last() else {
        return Vec::new();
    };
    let second_last = if words.len() > 2 { init.last().copied() } else { None };

    let last_is_acronym = is_acronym_like(last);
    match second_last {
        Some(second_last) if last_is_acronym && is_acronym_like(second_last) => {
            let mut cased: Vec<String> = words[..words.len() - 2]
                .iter()
                .map(|w| capitalize(w))
                .collect();
            cased.push(format!("{}_{}", second_last, last));
            cased
        }
        _ if last_is_acronym => {
            let mut cased: Vec<String> = init.iter().map(|w| capitalize(w)).collect();
            cased.push(last.to_string());
            cased
        }
        _ => words.iter().map(|w| capitalize(w)).collect(),
    }
}

/// Drop the last word when it repeats the first (`Error`, `Usage`, `Error` -> `Error`, `Usage`)
pub fn drop_repeated_suffix(mut words: Vec<String>) -> Vec<String> {
    if words.len() >= 2 && words.first() == words.last() {
        words.pop();
    }
    words
}

pub fn fix_ok_suffix(mut words: Vec<String>) -> Vec<String> {
    if let Some(last) = words.last_mut() {
        if last == "Ok" {
            *last = "OK".to_string();
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_strip_library_prefix() {
        assert_eq!(strip_library_prefix("heif_channel_Y"), "channel_Y");
        assert_eq!(strip_library_prefix("channel_Y"), "channel_Y");
        assert_eq!(strip_library_prefix("my_heif_channel"), "my_heif_channel");
    }

    #[test]
    fn test_prefix_is_idempotent() {
        for raw in ["heif_error_Ok", "heif_chroma_interleaved_RGBA", "heif_colorspace_YCbCr"] {
            let stripped = strip_library_prefix(raw);
            let reapplied = format!("{}{}", LIBRARY_PREFIX, stripped);
            assert_eq!(reapplied, raw);
            assert_eq!(transcode(&reapplied), transcode(raw));
        }
    }

    #[test]
    fn test_is_acronym_like() {
        assert!(is_acronym_like("AV1"));
        assert!(is_acronym_like("RGB"));
        assert!(is_acronym_like("YCbCr"));
        assert!(is_acronym_like("BE"));
        assert!(!is_acronym_like("Ok"));
        assert!(!is_acronym_like("Y"));
        assert!(!is_acronym_like("420"));
        assert!(!is_acronym_like(""));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("chroma"), "Chroma");
        assert_eq!(capitalize("yCbCr"), "YCbCr");
        assert_eq!(capitalize("av1"), "AV1");
        assert_eq!(capitalize("420"), "420");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_acronym_pair_is_joined_with_underscore() {
        let cased = apply_casing(&["chroma", "interleaved", "RRGGBB", "BE"]);
        assert_eq!(cased, owned(&["Chroma", "Interleaved", "RRGGBB_BE"]));
        assert_eq!(transcode("heif_chroma_interleaved_RRGGBBAA_LE"), "ChromaInterleavedRRGGBBAA_LE");
    }

    #[test]
    fn test_acronym_pair_needs_more_than_two_words() {
        assert_eq!(apply_casing(&["RGB", "BE"]), owned(&["RGB", "BE"]));
        assert_eq!(transcode("heif_RGB_BE"), "RGBBE");
    }

    #[test]
    fn test_trailing_acronym_kept_verbatim() {
        assert_eq!(apply_casing(&["compression", "AV1"]), owned(&["Compression", "AV1"]));
        assert_eq!(transcode("heif_colorspace_YCbCr"), "ColorspaceYCbCr");
        assert_eq!(transcode("heif_chroma_interleaved_RGBA"), "ChromaInterleavedRGBA");
    }

    #[test]
    fn test_av1_rewrite() {
        assert_eq!(apply_casing(&["compression", "av1"]), owned(&["Compression", "AV1"]));
        assert_eq!(transcode("heif_suberror_Unsupported_av1_feature"), "SuberrorUnsupportedAV1Feature");
    }

    #[test]
    fn test_drop_repeated_suffix() {
        assert_eq!(
            drop_repeated_suffix(owned(&["Error", "Usage", "Error"])),
            owned(&["Error", "Usage"])
        );
        assert_eq!(drop_repeated_suffix(owned(&["Error"])), owned(&["Error"]));
        assert_eq!(drop_repeated_suffix(owned(&["Error", "Ok"])), owned(&["Error", "Ok"]));
        assert_eq!(transcode("heif_error_Decoder_plugin_error"), "ErrorDecoderPlugin");
    }

    #[test]
    fn test_fix_ok_suffix() {
        assert_eq!(fix_ok_suffix(owned(&["Error", "Ok"])), owned(&["Error", "OK"]));
        assert_eq!(fix_ok_suffix(owned(&["Okay"])), owned(&["Okay"]));
        assert!(fix_ok_suffix(Vec::new()).is_empty());
        assert_eq!(transcode("heif_error_Ok"), "ErrorOK");
    }

    #[test]
    fn test_member_names() {
        assert_eq!(transcode("heif_channel_Y"), "ChannelY");
        assert_eq!(transcode("heif_channel_Cb"), "ChannelCb");
        assert_eq!(transcode("heif_chroma_420"), "Chroma420");
        assert_eq!(transcode("heif_suberror_No_ftyp_box"), "SuberrorNoFtypBox");
        assert_eq!(transcode("heif_progress_step_total"), "ProgressStepTotal");
        assert_eq!(transcode("heif_chroma_downsampling_sharp_yuv"), "ChromaDownsamplingSharpYuv");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(transcode_type_name("heif_error_code"), "ErrorCode");
        assert_eq!(transcode_type_name("heif_channel"), "Channel");
        assert_eq!(transcode_type_name("heif_chroma_upsampling_algorithm"), "ChromaUpsamplingAlgorithm");
    }

    #[test]
    fn test_type_names_skip_member_rewrites() {
        assert_eq!(transcode_type_name("heif_error_Ok"), "ErrorOk");
        assert_eq!(transcode_type_name("heif_error_usage_error"), "ErrorUsageError");
    }
}
