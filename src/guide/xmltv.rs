//! XMLTV serializer
//!
//! Output layout: declaration and opening `<tv>` on one line, then one
//! line per `channel` and per `programme`, each ended by CRLF, then `</tv>`
//! with no trailing newline. Every piece of text is passed through
//! [`escape_string`] before it is placed in an attribute or element body.

use tracing::debug;

use crate::models::{CanonicalChannel, LocalizedText, ProgrammeEntry};
use crate::utils::{escape_string, format_xmltv_timestamp};

pub const XMLTV_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?><tv>\r\n";
pub const XMLTV_FOOTER: &str = "</tv>";

/// Serialized guide plus what happened to the programme entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGuide {
    pub content: String,
    pub programmes_emitted: usize,
    /// Entries without both a start and a stop, or with unrepresentable times
    pub programmes_skipped: usize,
}

/// Render channels followed by programmes as one XMLTV document
pub fn render_xmltv<'a, I>(channels: &[CanonicalChannel], programmes: I) -> RenderedGuide
where
    I: IntoIterator<Item = &'a ProgrammeEntry>,
{
    let mut xmltv = String::from(XMLTV_HEADER);
    let mut programmes_emitted = 0;
    let mut programmes_skipped = 0;

    for channel in channels {
        render_channel(&mut xmltv, channel);
    }

    for programme in programmes {
        if render_programme(&mut xmltv, programme) {
            programmes_emitted += 1;
        } else {
            programmes_skipped += 1;
        }
    }

    xmltv.push_str(XMLTV_FOOTER);

    RenderedGuide {
        content: xmltv,
        programmes_emitted,
        programmes_skipped,
    }
}

fn render_channel(xmltv: &mut String, channel: &CanonicalChannel) {
    xmltv.push_str(&format!(
        "<channel id=\"{}\">",
        escape_string(Some(channel.id.as_str()), "")
    ));
    for display_name in &channel.display_names {
        xmltv.push_str(&format!(
            "<display-name>{}</display-name>",
            escape_string(Some(display_name.as_str()), "")
        ));
    }
    if let Some(logo) = channel.logo_url() {
        xmltv.push_str(&format!("<icon src=\"{}\"/>", escape_string(Some(logo), "")));
    }
    xmltv.push_str(&format!(
        "<url>{}</url>",
        escape_string(Some(channel.site.as_str()), "")
    ));
    xmltv.push_str("</channel>\r\n");
}

/// Returns false when the entry cannot be emitted
fn render_programme(xmltv: &mut String, programme: &ProgrammeEntry) -> bool {
    let Some((start, stop)) = programme.timing() else {
        return false;
    };
    let (start, stop) = match (format_xmltv_timestamp(start), format_xmltv_timestamp(stop)) {
        (Ok(start), Ok(stop)) => (start, stop),
        (Err(e), _) | (_, Err(e)) => {
            debug!(
                "Skipping programme on channel {:?}: {}",
                programme.channel, e
            );
            return false;
        }
    };

    xmltv.push_str(&format!(
        "<programme start=\"{}\" stop=\"{}\" channel=\"{}\">",
        start,
        stop,
        escape_string(programme.channel.as_deref(), "")
    ));
    render_localized(xmltv, "title", &programme.title);
    render_localized(xmltv, "desc", &programme.description);
    render_localized(xmltv, "category", &programme.categories);
    for icon in &programme.icons {
        xmltv.push_str(&format!("<icon src=\"{}\"/>", escape_string(Some(icon.as_str()), "")));
    }
    xmltv.push_str("</programme>\r\n");
    true
}

fn render_localized(xmltv: &mut String, element: &str, texts: &[LocalizedText]) {
    for text in texts {
        xmltv.push_str(&format!(
            "<{element} lang=\"{}\">{}</{element}>",
            escape_string(text.lang.as_deref(), ""),
            escape_string(text.value.as_deref(), "")
        ));
    }
}
