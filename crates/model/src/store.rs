//! Deck package persistence.
//!
//! A deck package is the JSON serialization of a presentation tree: document
//! properties, the master's layouts, the notes master shapes, slides (which
//! reference layouts by name), and section boundaries. Loading assigns fresh
//! ids; saving strips them, so ids never leak into files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::presentation::Presentation;
use crate::types::{
    CustomLayout, DocumentProperties, LayoutId, NotesMaster, NotesPage, ParagraphFormat,
    PlaceholderRole, Section, Shape, ShapeId, ShapeKind, Slide, SlideId, SlideMaster, TextFrame,
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct DeckFile {
    #[serde(default)]
    properties: PropertiesFile,
    #[serde(default)]
    layouts: Vec<LayoutFile>,
    #[serde(default)]
    notes_master: Vec<ShapeFile>,
    #[serde(default)]
    slides: Vec<SlideFile>,
    #[serde(default)]
    sections: Vec<SectionFile>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PropertiesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keywords: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LayoutFile {
    name: String,
    #[serde(default)]
    shapes: Vec<ShapeFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SlideFile {
    layout: String,
    #[serde(default)]
    shapes: Vec<ShapeFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<Vec<ShapeFile>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SectionFile {
    name: String,
    first_slide: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct ShapeFile {
    name: String,
    kind: ShapeKindFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<RoleFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<TextFrameFile>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ShapeKindFile {
    Placeholder,
    TextBox,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RoleFile {
    Title,
    Subtitle,
    Body,
    SlideNumber,
    Footer,
    Other,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextFrameFile {
    text: String,
    #[serde(default)]
    space_before: f32,
    #[serde(default)]
    space_after: f32,
    #[serde(default)]
    space_within: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

/// Load a deck package into a presentation rooted at `path`.
pub fn load(path: &Path) -> Result<Presentation> {
    let data = fs::read_to_string(path)?;
    let file: DeckFile = serde_json::from_str(&data)?;
    from_file(file, path)
}

/// Write a presentation out as a deck package.
pub fn save(prs: &Presentation, path: &Path) -> Result<()> {
    let file = to_file(prs)?;
    let data = serde_json::to_string_pretty(&file)?;
    fs::write(path, data)?;
    Ok(())
}

fn from_file(file: DeckFile, path: &Path) -> Result<Presentation> {
    let mut prs = Presentation::new(path);
    prs.properties = DocumentProperties {
        title: file.properties.title,
        subject: file.properties.subject,
        category: file.properties.category,
        keywords: file.properties.keywords,
    };

    let mut layouts = Vec::with_capacity(file.layouts.len());
    for layout in file.layouts {
        let id = LayoutId(prs.alloc_id());
        let shapes = shapes_from_file(&mut prs, layout.shapes);
        layouts.push(CustomLayout {
            id,
            name: layout.name,
            shapes,
        });
    }
    prs.master = SlideMaster { layouts };
    let notes_shapes = shapes_from_file(&mut prs, file.notes_master);
    prs.notes_master = NotesMaster {
        shapes: notes_shapes,
    };

    for slide in file.slides {
        let layout = prs
            .layout_by_name(&slide.layout)
            .map(|l| l.id())
            .ok_or_else(|| Error::UnknownLayout(slide.layout.clone()))?;
        let id = SlideId(prs.alloc_id());
        let shapes = shapes_from_file(&mut prs, slide.shapes);
        let notes = match slide.notes {
            Some(shapes) => Some(NotesPage {
                shapes: shapes_from_file(&mut prs, shapes),
            }),
            None => None,
        };
        prs.slides.push(Slide {
            id,
            layout,
            shapes,
            notes,
        });
    }

    prs.sections = file
        .sections
        .into_iter()
        .map(|s| Section {
            name: s.name,
            first_slide: s.first_slide,
        })
        .collect();
    prs.sections.sort_by_key(|s| s.first_slide);

    Ok(prs)
}

fn shapes_from_file(prs: &mut Presentation, shapes: Vec<ShapeFile>) -> Vec<Shape> {
    shapes
        .into_iter()
        .map(|sf| {
            let id = ShapeId(prs.alloc_id());
            let kind = match sf.kind {
                ShapeKindFile::Placeholder => ShapeKind::Placeholder {
                    role: role_from_file(sf.role),
                },
                ShapeKindFile::TextBox => ShapeKind::TextBox,
                ShapeKindFile::Other => ShapeKind::Other,
            };
            let text_frame = sf.text.map(|t| TextFrame {
                text: t.text,
                format: ParagraphFormat::new(t.space_before, t.space_after, t.space_within),
                language_tag: t.language,
            });
            Shape {
                id,
                name: sf.name,
                kind,
                text_frame,
            }
        })
        .collect()
}

fn role_from_file(role: Option<RoleFile>) -> PlaceholderRole {
    match role.unwrap_or(RoleFile::Other) {
        RoleFile::Title => PlaceholderRole::Title,
        RoleFile::Subtitle => PlaceholderRole::Subtitle,
        RoleFile::Body => PlaceholderRole::Body,
        RoleFile::SlideNumber => PlaceholderRole::SlideNumber,
        RoleFile::Footer => PlaceholderRole::Footer,
        RoleFile::Other => PlaceholderRole::Other,
    }
}

fn to_file(prs: &Presentation) -> Result<DeckFile> {
    let mut slides = Vec::with_capacity(prs.slide_count());
    for slide in &prs.slides {
        let layout = prs
            .layout(slide.layout())
            .ok_or_else(|| Error::UnknownLayout(format!("{:?}", slide.layout())))?
            .name()
            .to_string();
        slides.push(SlideFile {
            layout,
            shapes: shapes_to_file(slide.shapes()),
            notes: slide.notes_page().map(|p| shapes_to_file(p.shapes())),
        });
    }

    Ok(DeckFile {
        properties: PropertiesFile {
            title: prs.properties.title.clone(),
            subject: prs.properties.subject.clone(),
            category: prs.properties.category.clone(),
            keywords: prs.properties.keywords.clone(),
        },
        layouts: prs
            .layouts()
            .iter()
            .map(|l| LayoutFile {
                name: l.name().to_string(),
                shapes: shapes_to_file(l.shapes()),
            })
            .collect(),
        notes_master: shapes_to_file(prs.notes_master().shapes()),
        slides,
        sections: prs
            .sections()
            .iter()
            .map(|s| SectionFile {
                name: s.name().to_string(),
                first_slide: s.first_slide(),
            })
            .collect(),
    })
}

fn shapes_to_file(shapes: &[Shape]) -> Vec<ShapeFile> {
    shapes
        .iter()
        .map(|shape| {
            let (kind, role) = match shape.kind() {
                ShapeKind::Placeholder { role } => {
                    (ShapeKindFile::Placeholder, Some(role_to_file(role)))
                }
                ShapeKind::TextBox => (ShapeKindFile::TextBox, None),
                ShapeKind::Other => (ShapeKindFile::Other, None),
            };
            ShapeFile {
                name: shape.name().to_string(),
                kind,
                role,
                text: shape.text_frame().map(|f| TextFrameFile {
                    text: f.text.clone(),
                    space_before: f.format.space_before(),
                    space_after: f.format.space_after(),
                    space_within: f.format.space_within(),
                    language: f.language_tag.clone(),
                }),
            }
        })
        .collect()
}

fn role_to_file(role: PlaceholderRole) -> RoleFile {
    match role {
        PlaceholderRole::Title => RoleFile::Title,
        PlaceholderRole::Subtitle => RoleFile::Subtitle,
        PlaceholderRole::Body => RoleFile::Body,
        PlaceholderRole::SlideNumber => RoleFile::SlideNumber,
        PlaceholderRole::Footer => RoleFile::Footer,
        PlaceholderRole::Other => RoleFile::Other,
    }
}
