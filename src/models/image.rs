/// Just enough of an Edge image record to locate its installer ISO.
#[derive(Debug, serde::Deserialize, Clone, Default)]
#[serde(default)]
pub struct ImageMetadata {
    #[serde(rename = "Installer")]
    pub installer: Installer,
}

#[derive(Debug, serde::Deserialize, Clone, Default)]
#[serde(default)]
pub struct Installer {
    #[serde(rename = "ImageBuildISOURL")]
    pub image_build_iso_url: String,
}
