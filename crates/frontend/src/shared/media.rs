//! Browser media helpers for catalog cards: spoken names and image fallback

/// Speak `text` with the browser's speech synthesis, if available
pub fn speak(text: &str, lang: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let synth = match window.speech_synthesis() {
        Ok(synth) => synth,
        Err(e) => {
            log::debug!("Speech synthesis unavailable: {:?}", e);
            return;
        }
    };
    match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
        Ok(utterance) => {
            utterance.set_lang(lang);
            synth.speak(&utterance);
        }
        Err(e) => log::debug!("Cannot create utterance: {:?}", e),
    }
}

/// Swap a broken image for the placeholder, once
pub fn swap_to_fallback(img: &web_sys::HtmlImageElement, fallback: &str) {
    if is_fallback_src(&img.src(), fallback) {
        return;
    }
    img.set_src(fallback);
}

fn is_fallback_src(current: &str, fallback: &str) -> bool {
    // `src` reads back as an absolute URL while the fallback may be relative.
    !fallback.is_empty() && current.ends_with(fallback)
}
