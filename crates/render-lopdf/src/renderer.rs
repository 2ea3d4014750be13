use crate::canvas::PdfCanvas;
use crate::helpers::{font_resource_name, text_string};
use geo_layout::{LaidOutPage, OutlineEntry};
use geo_render_core::{Canvas, DocumentInfo, DocumentRenderer, PageDecorator, PageInfo, RenderError};
use geo_style::{BuiltinFont, PageSetup};
use geo_types::Size;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use log::debug;
use std::io::Write;

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and then writes it to the output stream.
pub struct LopdfRenderer {
    document: Document,
    page_size: Size,
    pages_id: ObjectId,
    resources_id: ObjectId,
    catalog_id: Option<ObjectId>,
    page_ids: Vec<ObjectId>,
    outline: Vec<(ObjectId, OutlineEntry)>,
}

impl LopdfRenderer {
    pub fn new(setup: &PageSetup) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            page_size: Size::new(setup.width(), setup.height()),
            pages_id,
            resources_id,
            catalog_id: None,
            page_ids: Vec::new(),
            outline: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Links the outline entries into the `/Outlines` tree. Entries nest under
    /// the closest preceding entry with a smaller level.
    fn build_outlines(&mut self) -> Option<ObjectId> {
        if self.outline.is_empty() {
            return None;
        }

        struct Node {
            id: ObjectId,
            title: String,
            dest: Vec<Object>,
            children: Vec<Node>,
        }

        let page_height = self.page_size.height;
        let mut roots: Vec<Node> = Vec::new();
        // Path of (level, index) pairs from the root to the last inserted node.
        let mut path: Vec<(u8, usize)> = Vec::new();
        for (page_id, entry) in std::mem::take(&mut self.outline) {
            let node = Node {
                id: self.document.new_object_id(),
                title: entry.title,
                dest: vec![
                    Object::Reference(page_id),
                    "FitH".into(),
                    entry.y.min(page_height).into(),
                ],
                children: Vec::new(),
            };
            while path.last().is_some_and(|(level, _)| *level >= entry.level) {
                path.pop();
            }
            let mut siblings = &mut roots;
            for (_, idx) in &path {
                siblings = &mut siblings[*idx].children;
            }
            siblings.push(node);
            path.push((entry.level, siblings.len() - 1));
        }

        fn write_level(document: &mut Document, items: &[Node], parent_id: ObjectId) {
            for (i, item) in items.iter().enumerate() {
                let mut dict = dictionary! {
                    "Title" => text_string(&item.title),
                    "Parent" => parent_id,
                    "Dest" => item.dest.clone(),
                };
                if i > 0 {
                    dict.set("Prev", items[i - 1].id);
                }
                if i + 1 < items.len() {
                    dict.set("Next", items[i + 1].id);
                }
                if let (Some(first), Some(last)) = (item.children.first(), item.children.last()) {
                    dict.set("First", first.id);
                    dict.set("Last", last.id);
                    dict.set("Count", -(item.children.len() as i64));
                    write_level(document, &item.children, item.id);
                }
                document.objects.insert(item.id, Object::Dictionary(dict));
            }
        }

        let (first, last) = (roots.first()?.id, roots.last()?.id);
        let root_id = self.document.new_object_id();
        write_level(&mut self.document, &roots, root_id);
        self.document.objects.insert(
            root_id,
            Object::Dictionary(dictionary! {
                "Type" => "Outlines",
                "First" => first,
                "Last" => last,
                "Count" => roots.len() as i64,
            }),
        );
        Some(root_id)
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn begin_document(&mut self, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut fonts = Dictionary::new();
        for font in BuiltinFont::ALL {
            let font_id = self.document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font_resource_name(font).into_bytes(), font_id);
        }

        // This is the central resources dictionary for the entire document.
        self.document.objects.insert(
            self.resources_id,
            Object::Dictionary(dictionary! { "Font" => fonts }),
        );
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![],
                "Count" => 0,
            }),
        );

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);
        self.catalog_id = Some(catalog_id);

        let mut info_dict = dictionary! {
            "Title" => text_string(&info.title),
            "Producer" => text_string(concat!("geo-reports ", env!("CARGO_PKG_VERSION"))),
        };
        if let Some(author) = &info.author {
            info_dict.set("Author", text_string(author));
        }
        if let Some(subject) = &info.subject {
            info_dict.set("Subject", text_string(subject));
        }
        let info_id = self.document.add_object(info_dict);
        self.document.trailer.set("Info", info_id);
        Ok(())
    }

    fn render_page(
        &mut self,
        page: &LaidOutPage,
        decorator: &dyn PageDecorator,
    ) -> Result<(), RenderError> {
        if self.catalog_id.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }

        let mut canvas = PdfCanvas::new(self.page_size);
        let info = PageInfo {
            number: page.number,
            size: self.page_size,
        };
        decorator.decorate(&info, &mut canvas);
        for op in &page.ops {
            canvas.draw(op);
        }

        let content = canvas.finish();
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.page_size.width.into(), self.page_size.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        self.outline
            .extend(page.outline.iter().map(|entry| (page_id, entry.clone())));
        debug!("Rendered page {} ({} ops)", page.number, page.ops.len());
        Ok(())
    }

    fn finish(mut self: Box<Self>, writer: &mut dyn Write) -> Result<(), RenderError> {
        let catalog_id = self
            .catalog_id
            .ok_or_else(|| RenderError::Other("Document not started".into()))?;

        if let Some(Object::Dictionary(pages_dict)) = self.document.objects.get_mut(&self.pages_id) {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", self.page_ids.len() as i64);
        }

        if let Some(outline_id) = self.build_outlines() {
            if let Ok(catalog) = self.document.get_dictionary_mut(catalog_id) {
                catalog.set("Outlines", outline_id);
                catalog.set("PageMode", "UseOutlines");
            }
        }

        self.document.compress();
        let mut sink = writer;
        self.document.save_to(&mut sink)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_layout::{Paint, PaintOp};
    use geo_types::{Color, Rect};

    fn page(number: usize, outline: Vec<OutlineEntry>) -> LaidOutPage {
        LaidOutPage {
            number,
            ops: vec![PaintOp::Rect {
                rect: Rect::new(50.0, 50.0, 100.0, 20.0),
                paint: Paint::fill(Color::BLACK),
            }],
            outline,
        }
    }

    fn render(pages: &[LaidOutPage]) -> Vec<u8> {
        let mut renderer = Box::new(LopdfRenderer::new(&PageSetup::default()));
        renderer
            .begin_document(&DocumentInfo {
                title: "Test".into(),
                ..Default::default()
            })
            .unwrap();
        let footer = |info: &PageInfo, canvas: &mut dyn Canvas| {
            canvas.draw_string(
                50.0,
                28.0,
                &format!("Page {}", info.number),
                BuiltinFont::Helvetica,
                7.0,
                Color::BLACK,
            );
        };
        for p in pages {
            renderer.render_page(p, &footer).unwrap();
        }
        let mut out = Vec::new();
        renderer.finish(&mut out).unwrap();
        out
    }

    #[test]
    fn writes_a_loadable_document_with_decorations() {
        let bytes = render(&[page(1, vec![]), page(2, vec![])]);
        assert!(bytes.starts_with(b"%PDF-1.7"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        let text = doc.extract_text(&[2]).unwrap();
        assert!(text.contains("Page 2"), "got {text:?}");
    }

    #[test]
    fn outline_entries_become_bookmarks() {
        let entry = |title: &str, level| OutlineEntry {
            title: title.into(),
            level,
            y: 700.0,
        };
        let bytes = render(&[
            page(1, vec![entry("Section 1", 1), entry("1.1", 2)]),
            page(2, vec![entry("Section 2", 1)]),
        ]);
        let doc = Document::load_mem(&bytes).unwrap();
        let catalog = doc.catalog().unwrap();
        let outlines_id = catalog.get(b"Outlines").unwrap().as_reference().unwrap();
        let outlines = doc.get_dictionary(outlines_id).unwrap();
        assert_eq!(outlines.get(b"Count").unwrap().as_i64().unwrap(), 2);
    }

    #[test]
    fn rendering_before_begin_fails() {
        let mut renderer = LopdfRenderer::new(&PageSetup::default());
        let noop = |_: &PageInfo, _: &mut dyn Canvas| {};
        assert!(renderer.render_page(&page(1, vec![]), &noop).is_err());
    }
}
