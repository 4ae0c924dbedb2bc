//! MIME type constants used by the catalog and the classifiers.

/// Portable Document Format
pub const PDF: &str = "application/pdf";
/// Rich Text Format
pub const RTF: &str = "application/rtf";
/// Legacy OLE2 compound documents (.doc, .xls, .ppt all share this header)
pub const OLE_COMPOUND: &str = "application/msword";
/// WordPerfect documents
pub const WORDPERFECT: &str = "application/vnd.wordperfect";
/// ZIP and everything built on it (DOCX, XLSX, ODT, EPUB, JAR, APK, ...)
pub const ZIP: &str = "application/zip";
/// Office Open XML word processing document.
///
/// No signature maps to this type because a DOCX is indistinguishable from
/// ZIP by its leading bytes; it is listed so allow-lists can name it.
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PLAIN_TEXT: &str = "text/plain";
pub const HTML: &str = "text/html";
pub const XML: &str = "application/xml";

pub const RAR: &str = "application/vnd.rar";
pub const SEVEN_ZIP: &str = "application/x-7z-compressed";
pub const GZIP: &str = "application/gzip";
pub const BZIP2: &str = "application/x-bzip2";
pub const XZ: &str = "application/x-xz";
pub const ZSTD: &str = "application/zstd";
pub const CAB: &str = "application/vnd.ms-cab-compressed";

pub const PNG: &str = "image/png";
pub const JPEG: &str = "image/jpeg";
pub const JPEG_2000: &str = "image/jp2";
pub const GIF: &str = "image/gif";
pub const BMP: &str = "image/bmp";
pub const TIFF: &str = "image/tiff";
pub const ICO: &str = "image/x-icon";
pub const PSD: &str = "image/vnd.adobe.photoshop";

pub const MP3: &str = "audio/mpeg";
pub const FLAC: &str = "audio/flac";
pub const OGG: &str = "audio/ogg";
pub const MIDI: &str = "audio/midi";

pub const MATROSKA: &str = "video/x-matroska";
pub const FLV: &str = "video/x-flv";
pub const ASF: &str = "video/x-ms-asf";

pub const WOFF: &str = "font/woff";
pub const WOFF2: &str = "font/woff2";
pub const OTF: &str = "font/otf";
pub const TTF: &str = "font/ttf";

pub const PE: &str = "application/vnd.microsoft.portable-executable";
pub const ELF: &str = "application/x-executable";
pub const MACH_O: &str = "application/x-mach-binary";
pub const JAVA_CLASS: &str = "application/java-vm";
pub const WASM: &str = "application/wasm";
pub const DEX: &str = "application/vnd.android.dex";

pub const SQLITE: &str = "application/vnd.sqlite3";
