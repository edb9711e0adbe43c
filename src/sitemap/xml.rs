// src/sitemap/xml.rs
// =============================================================================
// Sitemap XML output.
//
// Produces (two-space indentation, trailing newline):
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/</loc>
//     </url>
//   </urlset>
//
// quick-xml takes care of escaping, so URLs with '&' in the query string
// still make a well-formed document.
// =============================================================================

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

use super::{EmitError, SITEMAP_XMLNS};

pub fn write_xml<W: Write>(out: W, urls: &[String]) -> Result<(), EmitError> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_event(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_XMLNS)])),
    )?;

    for url in urls {
        write_event(&mut writer, Event::Start(BytesStart::new("url")))?;
        write_event(&mut writer, Event::Start(BytesStart::new("loc")))?;
        write_event(&mut writer, Event::Text(BytesText::new(url)))?;
        write_event(&mut writer, Event::End(BytesEnd::new("loc")))?;
        write_event(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut out = writer.into_inner();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), EmitError> {
    writer
        .write_event(event)
        .map_err(|e| EmitError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(urls: &[&str]) -> String {
        let urls: Vec<String> = urls.iter().map(|u| u.to_string()).collect();
        let mut out = Vec::new();
        write_xml(&mut out, &urls).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_document_layout() {
        let xml = render(&["https://x.test/", "https://x.test/a"]);
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
            "  <url>\n",
            "    <loc>https://x.test/</loc>\n",
            "  </url>\n",
            "  <url>\n",
            "    <loc>https://x.test/a</loc>\n",
            "  </url>\n",
            "</urlset>\n",
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_urls_are_escaped() {
        let xml = render(&["https://x.test/search?a=1&b=<2>"]);
        assert!(xml.contains("<loc>https://x.test/search?a=1&amp;b=&lt;2&gt;</loc>"));
    }

    #[test]
    fn test_empty_result_is_still_a_document() {
        let xml = render(&[]);
        assert!(xml.contains(&format!("<urlset xmlns=\"{}\">", SITEMAP_XMLNS)));
        assert!(xml.ends_with("</urlset>\n"));
        assert!(!xml.contains("<url>"));
    }
}
