//! Display names for GKE image and disk type tokens.
//!
//! Unknown tokens pass through unchanged; "Not available" is reserved for
//! fields that are absent from the API response.

/// Node image type token → display name.
pub const IMAGE_TYPES: &[(&str, &str)] = &[
    (
        "COS_CONTAINERD",
        "Container-Optimized OS with containerd (cos_containerd)",
    ),
    ("UBUNTU", "Ubuntu"),
    ("UBUNTU_CONTAINERD", "Ubuntu with containerd"),
    ("CUSTOM_IMAGE", "Custom Image"),
    ("ML_IMAGE", "Machine Learning Optimized Image"),
    ("BIG_DATA_IMAGE", "Big Data Optimized Image"),
    ("LEGACY_IMAGE", "Legacy Image"),
];

/// Boot disk type token → display name.
pub const DISK_TYPES: &[(&str, &str)] = &[
    ("pd-standard", "Standard persistent disk"),
    ("pd-balanced", "Balanced persistent disk"),
    ("pd-ssd", "SSD persistent disk"),
    ("regional-ssd", "Regional SSD"),
    ("local-ssd", "Local SSD"),
    ("confidential-vm", "Confidential VM"),
];

fn lookup<'a>(table: &[(&str, &'a str)], token: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, label)| *label)
        .unwrap_or(token)
}

/// Display name for an image type, or the token itself when unmapped.
pub fn image_type_label(token: &str) -> &str {
    lookup(IMAGE_TYPES, token)
}

/// Display name for a disk type, or the token itself when unmapped.
pub fn disk_type_label(token: &str) -> &str {
    lookup(DISK_TYPES, token)
}
