/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Built-in example styles.
//!
//! These are author-date reference styles for a few common source types.
//! The CLI renders with them, and they double as worked examples of the
//! builder.

use crate::error::ProcessorError;
use crate::guide::{GuideConfig, StyleGuide};
use styleguide_core::{Mixin, Segments, StyleBuilder, StyleDefinition};

fn date_defaults(style: &mut StyleBuilder) {
    style
        .set("datePublished", |date| {
            date.format("YYYY").stub("n.d.");
        })
        .set("dateAccessed", |date| {
            date.format("MMMM D, YYYY");
        });
}

/// Year-only publication dates with an `n.d.` stub, and long access dates.
pub static DATE_DEFAULTS: Mixin = Mixin::new("date-defaults", date_defaults);

/// A book with an author or an editor.
pub fn book() -> StyleDefinition {
    StyleDefinition::new("BOOK0001", "Book", |style| {
        style
            .inherit(&DATE_DEFAULTS)
            .add_trait("author ")
            .add_trait_with("editor (Ed.) ", |editor| {
                editor.format("F. Last");
            })
            .at_least(&["author", "editor"])
            .add_trait("(datePublished). ")
            .add_trait_with("title", |title| {
                title.italics_only(Segments::MAIN);
            })
            .add_trait(" (edition ed.)")
            .optional("edition")
            .text(". ")
            .add_trait("place: ")
            .optional("place")
            .add_trait("publisher.")
            .upon("author", |ctx| {
                ctx.hide("editor");
            });
    })
    .with_description("Authored or edited book; editors give way to authors.")
}

/// A journal article.
pub fn article() -> StyleDefinition {
    StyleDefinition::new("ARTICLE0001", "Journal article", |style| {
        style
            .inherit(&DATE_DEFAULTS)
            .add_trait("author ")
            .add_trait("(datePublished). ")
            .add_trait("title. ")
            .add_trait_with("journal", |journal| {
                journal.italics_only(Segments::MAIN);
            })
            .add_trait_with(", volume", |volume| {
                volume.italics_only(Segments::MAIN);
            })
            .add_trait("(issue)")
            .optional("issue")
            .add_trait(", pages")
            .optional("pages")
            .text(".")
            .add_trait(" DOI: doi")
            .optional("doi");
    })
}

/// A chapter in an edited book.
pub fn chapter() -> StyleDefinition {
    StyleDefinition::new("CHAPTER0001", "Book chapter", |style| {
        style
            .inherit(&DATE_DEFAULTS)
            .add_trait("author ")
            .add_trait("(datePublished). ")
            .add_trait("title. ")
            .add_trait_with("In editor (Eds.), ", |editor| {
                editor.format("F. Last");
            })
            .add_trait_with("containerTitle", |container| {
                container.italics_only(Segments::MAIN);
            })
            .add_trait(" (pp. pages)")
            .optional("pages")
            .text(". ")
            .add_trait("publisher.")
            .upon("pages", |ctx| {
                if let Some(pages) = ctx.record().get("pages").and_then(|v| v.as_plain()) {
                    if !pages.contains('-') {
                        ctx.set_with("pages", |p| {
                            p.prefix(" (p. ");
                        });
                    }
                }
            });
    })
    .with_description("Chapter in an edited book, with page range.")
}

/// A web page, with its access date.
pub fn web_page() -> StyleDefinition {
    StyleDefinition::new("WEB0001", "Web page", |style| {
        style
            .inherit(&DATE_DEFAULTS)
            .add_trait("author ")
            .optional("author")
            .add_trait("(datePublished). ")
            .add_trait_with("title", |title| {
                title.italics_only(Segments::MAIN);
            })
            .add_trait(". Retrieved dateAccessed, from ")
            .add_trait("url");
    })
}

/// Every built-in style, registered under its source type.
pub fn embedded_guide() -> Result<StyleGuide, ProcessorError> {
    let mut guide = StyleGuide::new(GuideConfig {
        id: "styleguide".to_string(),
        title: "Built-in styles".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    });
    guide
        .add("Book", [book()])?
        .add("Journal Article", [article()])?
        .add("Book Chapter", [chapter()])?
        .add("Web Page", [web_page()])?;
    Ok(guide)
}
