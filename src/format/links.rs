//! Video links for content ids.
//!
//! Exports sometimes decorate the numeric video id (`video_7301234567890123456`
//! or a full URL); the first run of 15+ ASCII digits is the id the platform
//! understands. Shorter ids are used as-is after trimming.

const MIN_VIDEO_ID_DIGITS: usize = 15;

pub fn canonical_video_id(id: &str) -> &str {
    let bytes = id.as_bytes();
    let mut start = None;
    for (idx, byte) in bytes.iter().enumerate() {
        match (byte.is_ascii_digit(), start) {
            (true, None) => start = Some(idx),
            (false, Some(from)) => {
                if idx - from >= MIN_VIDEO_ID_DIGITS {
                    return &id[from..idx];
                }
                start = None;
            }
            _ => {}
        }
    }
    if let Some(from) = start
        && bytes.len() - from >= MIN_VIDEO_ID_DIGITS
    {
        return &id[from..];
    }
    id.trim()
}

pub fn video_url(id: &str) -> String {
    format!("https://www.tiktok.com/@/video/{}", canonical_video_id(id))
}

pub fn embed_url(id: &str) -> String {
    format!("https://www.tiktok.com/embed/v2/{}", canonical_video_id(id))
}
