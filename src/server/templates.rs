//! Embedded HTML pages

/// Upload form served at `/`
pub const INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Audioscope</title>
    <style>
        body { font-family: sans-serif; max-width: 40em; margin: 3em auto; }
        form { margin-top: 2em; }
    </style>
</head>
<body>
    <h1>Audioscope</h1>
    <p>Upload an audio file (WAV, MP3, OGG or FLAC) to see its waveform
    and spectrogram.</p>
    <form action="/upload" method="post" enctype="multipart/form-data">
        <input type="file" name="file" accept=".wav,.mp3,.ogg,.flac">
        <button type="submit">Analyze</button>
    </form>
</body>
</html>
"#;

/// Result page embedding both plots as base64 data URIs
pub fn result_page(waveform_b64: &str, spectrogram_b64: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Audioscope - Results</title>
    <style>
        body {{ font-family: sans-serif; max-width: 64em; margin: 3em auto; }}
        img {{ max-width: 100%; border: 1px solid #ccc; }}
    </style>
</head>
<body>
    <h1>Analysis Results</h1>
    <h2>Waveform</h2>
    <img src="data:image/png;base64,{waveform_b64}" alt="Waveform">
    <h2>Spectrogram</h2>
    <img src="data:image/png;base64,{spectrogram_b64}" alt="Spectrogram">
    <p><a href="/">Analyze another file</a></p>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_posts_to_upload() {
        assert!(INDEX.contains(r#"action="/upload""#));
        assert!(INDEX.contains(r#"name="file""#));
        assert!(INDEX.contains("multipart/form-data"));
    }

    #[test]
    fn test_result_page_embeds_both_images() {
        let page = result_page("QUFB", "QkJC");
        assert!(page.contains("data:image/png;base64,QUFB"));
        assert!(page.contains("data:image/png;base64,QkJC"));
    }
}
