/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use styleguide_core::{Mixin, Patch, Record, Segments, StyleBuilder, StyleDefinition};
use styleguide_processor::{GuideConfig, RenderResult, StyleGuide};

// --- Shared builder routines ---

fn date_defaults(style: &mut StyleBuilder) {
    style.set("datePublished", |date| {
        date.format("YYYY").stub("n.d.");
    });
}

pub static DEFAULTS: Mixin = Mixin::new("defaults", date_defaults);

// --- Fixture styles ---

fn contributor() -> StyleDefinition {
    StyleDefinition::new("TEST0001", "Contributor", |s| {
        s.add_trait_with("author", |a| {
            a.separators(", ", " & ").format("Last, F.");
        });
    })
}

fn date() -> StyleDefinition {
    StyleDefinition::new("TEST0002", "Date", |s| {
        s.inherit(&DEFAULTS).add_trait("(datePublished)");
    })
}

fn string() -> StyleDefinition {
    StyleDefinition::new("TEST0003", "String", |s| {
        s.add_trait("title,");
    })
}

fn string_stub() -> StyleDefinition {
    StyleDefinition::new("TEST0004", "String stub", |s| {
        s.add_trait_with("title,", |t| {
            t.stub("foo");
        });
    })
}

fn number() -> StyleDefinition {
    StyleDefinition::new("TEST0005", "Number", |s| {
        s.add_trait("volume,");
    })
}

fn number_stub() -> StyleDefinition {
    StyleDefinition::new("TEST0006", "Number stub", |s| {
        s.add_trait_with("volume,", |v| {
            v.stub("no number");
        });
    })
}

fn text() -> StyleDefinition {
    StyleDefinition::new("TEST0007", "Text", |s| {
        s.text("some text").upon("title", |ctx| {
            ctx.hide("text");
        });
    })
}

fn text_hide() -> StyleDefinition {
    StyleDefinition::new("TEST0008", "Text hide", |s| {
        s.text_with("some text", |t| {
            t.hide();
        })
        .upon("title", |ctx| {
            ctx.show("text");
        });
    })
}

fn text_multi() -> StyleDefinition {
    StyleDefinition::new("TEST0009", "Text multi", |s| {
        s.text("foo").text("bar").upon("title", |ctx| {
            ctx.set("text", Patch::content("bam"))
                .set("text1", Patch::content("baz"));
        });
    })
}

fn enumeration() -> StyleDefinition {
    StyleDefinition::new("TEST0010", "Enum", |s| {
        s.add_trait_with("title", |t| {
            t.enumeration()
                .add("first", "Foo Bar")
                .add("second", "Bar Baz");
        })
        .upon("publisher", |ctx| {
            ctx.set_with("title", |t| {
                t.enumeration().relabel(0, "FOO BAR");
            });
        });
    })
}

fn enum_selector() -> StyleDefinition {
    StyleDefinition::new("TEST0011", "Enum selector", |s| {
        s.add_trait_with("title", |t| {
            t.enumeration()
                .add_selected("first", "Foo Bar", "a")
                .add_selected("second", "Bar Baz", "b");
        })
        .upon("publisher", |ctx| {
            ctx.set_with("title", |t| {
                t.enumeration()
                    .relabel(0, "FOO BAR")
                    .relabel(1, "BAR BAZ");
            });
        });
    })
}

fn prefix() -> StyleDefinition {
    StyleDefinition::new("TEST0012", "Prefix", |s| {
        s.add_trait("(title");
    })
}

fn suffix() -> StyleDefinition {
    StyleDefinition::new("TEST0013", "Suffix", |s| {
        s.add_trait("title)");
    })
}

fn bold() -> StyleDefinition {
    StyleDefinition::new("TEST0014", "Bold", |s| {
        s.add_trait_with("(title)", |t| {
            t.bold();
        });
    })
}

fn bold_prefix() -> StyleDefinition {
    StyleDefinition::new("TEST0015", "Bold prefix", |s| {
        s.add_trait_with("(title)", |t| {
            t.bold_only(Segments::PREFIX);
        });
    })
}

fn bold_prefix_main() -> StyleDefinition {
    StyleDefinition::new("TEST0016", "Bold prefix and main", |s| {
        s.add_trait_with("(title)", |t| {
            t.bold_only(Segments::parse_list("prefix main").unwrap());
        });
    })
}

fn bold_main_suffix() -> StyleDefinition {
    StyleDefinition::new("TEST0017", "Bold main and suffix", |s| {
        s.add_trait_with("(title)", |t| {
            t.bold_only(Segments::MAIN | Segments::SUFFIX);
        });
    })
}

fn bold_italics() -> StyleDefinition {
    StyleDefinition::new("TEST0018", "Bold and italics", |s| {
        s.add_trait_with("Title:title...", |t| {
            t.bold_only(Segments::PREFIX | Segments::MAIN)
                .italics_only(Segments::MAIN | Segments::SUFFIX);
        });
    })
}

fn show() -> StyleDefinition {
    StyleDefinition::new("TEST0019", "Show", |s| {
        s.add_trait_with("title", |t| {
            t.show();
        });
    })
}

fn hide() -> StyleDefinition {
    StyleDefinition::new("TEST0020", "Hide", |s| {
        s.add_trait_with("title", |t| {
            t.hide();
        });
    })
}

fn optional() -> StyleDefinition {
    StyleDefinition::new("TEST0021", "Optional", |s| {
        s.optional("title").add_trait("title");
    })
}

fn either() -> StyleDefinition {
    StyleDefinition::new("TEST0022", "Either", |s| {
        s.either("title", "volume")
            .add_trait("title")
            .add_trait("volume");
    })
}

fn either_optional() -> StyleDefinition {
    StyleDefinition::new("TEST0023", "Either optional", |s| {
        s.either_optional("title", "volume")
            .add_trait("title")
            .add_trait("volume");
    })
}

fn all() -> StyleDefinition {
    StyleDefinition::new("TEST0024", "All", |s| {
        s.all(&["title", "volume"])
            .add_trait("title")
            .add_trait("volume");
    })
}

fn all_optional() -> StyleDefinition {
    StyleDefinition::new("TEST0025", "All optional", |s| {
        s.all_optional(&["title", "volume"])
            .add_trait("title")
            .add_trait("volume");
    })
}

fn identical() -> StyleDefinition {
    StyleDefinition::new("TEST0026", "Identical", |s| {
        s.inherit(&DEFAULTS)
            .add_trait("datePublished")
            .add_duplicate_trait(" & datePublished", |d| {
                d.format("MMMM");
            });
    })
}

fn if_set() -> StyleDefinition {
    StyleDefinition::new("TEST0027", "If set", |s| {
        s.upon("title", |ctx| {
            ctx.set_with("publisher", |p| {
                p.prefix(" & ");
            });
        })
        .optional("title")
        .add_trait("title")
        .add_trait("publisher");
    })
}

fn upon_set() -> StyleDefinition {
    StyleDefinition::new("TEST0028", "Upon set", |s| {
        s.upon("title", |ctx| {
            ctx.set("publisher", Patch::prefix(" & "));
        })
        .optional("title")
        .add_trait("title")
        .add_trait("publisher");
    })
}

fn upon_style() -> StyleDefinition {
    StyleDefinition::new("TEST0029", "Upon style", |s| {
        s.optional("title")
            .add_trait("title")
            .add_trait_with("& publisher", |p| {
                p.bold();
            })
            .upon("title", |ctx| {
                ctx.set_with("publisher", |p| {
                    p.prefix(" ").bold_only(Segments::MAIN);
                });
            });
    })
}

fn upon_show() -> StyleDefinition {
    StyleDefinition::new("TEST0030", "Upon show", |s| {
        s.hide("publisher")
            .add_trait("title")
            .add_trait("publisher")
            .upon("title", |ctx| {
                ctx.show("publisher");
            });
    })
}

fn upon_hide() -> StyleDefinition {
    StyleDefinition::new("TEST0031", "Upon hide", |s| {
        s.upon("title", |ctx| {
            ctx.hide("publisher");
        })
        .optional("title")
        .add_trait("title")
        .add_trait("publisher");
    })
}

fn upon_show_hide() -> StyleDefinition {
    StyleDefinition::new("TEST0032", "Upon show and hide", |s| {
        s.upon("title", |ctx| {
            ctx.show("volume").hide("publisher");
        })
        .optional("title")
        .optional("volume")
        .add_trait("title")
        .add_trait("volume")
        .add_trait("publisher");
    })
}

fn builder_show() -> StyleDefinition {
    StyleDefinition::new("TEST0033", "Builder show", |s| {
        s.at_least(&["title", "publisher"])
            .add_trait("title")
            .add_trait("publisher")
            .add_trait("author")
            .either("title", "author")
            .show("publisher");
    })
}

/// Every fixture style, in id order.
pub fn fixtures() -> Vec<StyleDefinition> {
    vec![
        contributor(),
        date(),
        string(),
        string_stub(),
        number(),
        number_stub(),
        text(),
        text_hide(),
        text_multi(),
        enumeration(),
        enum_selector(),
        prefix(),
        suffix(),
        bold(),
        bold_prefix(),
        bold_prefix_main(),
        bold_main_suffix(),
        bold_italics(),
        show(),
        hide(),
        optional(),
        either(),
        either_optional(),
        all(),
        all_optional(),
        identical(),
        if_set(),
        upon_set(),
        upon_style(),
        upon_show(),
        upon_hide(),
        upon_show_hide(),
        builder_show(),
    ]
}

pub fn fixture_guide() -> StyleGuide {
    let mut guide = StyleGuide::new(GuideConfig {
        id: "example".to_string(),
        title: "Example".to_string(),
        version: Some("0.0.1".to_string()),
    });
    guide.add("Example", fixtures()).unwrap();
    guide
}

// --- Helper Functions for Rendering ---

pub fn record(data: serde_json::Value) -> Record {
    serde_json::from_value(data).unwrap()
}

/// Render `data` with fixture style `id`.
pub fn find(id: &str, data: serde_json::Value) -> RenderResult {
    fixture_guide().run(id, &record(data)).unwrap()
}

pub fn error_keys(result: &RenderResult) -> Vec<Vec<String>> {
    result.errors.iter().map(|e| e.traits.clone()).collect()
}
