//! Extract → render → extract must preserve specifier and bindings

use std::path::Path;
use tidyimports::{
    ImportCreator, ImportElement, ImportElementGroup, ImportParser, StyleConfiguration,
    TypeScriptImportParser, WrapPolicy,
};

const SOURCE: &str = r#"import 'zone.js';
import React from "react";
import * as path from 'path';
import { readFile, writeFile as write } from 'fs';
import Default, { named, other as renamed } from './mixed';
import Foo, * as everything from './foo';
import type { Props } from './props';
import {} from './empty';

export const used = [React, path, readFile, write, Default, named, renamed, Foo, everything];
"#;

fn extract(code: &str) -> Vec<ImportElement> {
    let mut parser = TypeScriptImportParser::new().unwrap();
    parser
        .parse_imports(Path::new("round_trip.ts"), Some(code))
        .unwrap()
        .import_elements
}

/// The parts of an element that must survive a round trip
fn shape(element: &ImportElement) -> (String, bool, Option<String>, Vec<(String, Option<String>)>) {
    (
        element.module_specifier.clone(),
        element.has_binding_clause,
        element.default_local_name.clone(),
        element
            .bindings
            .iter()
            .map(|b| (b.imported_name.clone(), b.local_alias.clone()))
            .collect(),
    )
}

#[test]
fn test_single_line_round_trip() {
    let original = extract(SOURCE);
    assert_eq!(original.len(), 8);

    let creator = ImportCreator::new(StyleConfiguration {
        wrap_policy: WrapPolicy {
            threshold: 1_000,
            ..Default::default()
        },
        ..Default::default()
    });

    for element in &original {
        let rendered = creator.create_import_statement(element);
        assert!(!rendered.contains('\n'), "{rendered} should stay on one line");

        let reparsed = extract(&rendered);
        assert_eq!(reparsed.len(), 1, "{rendered} should parse as one import");
        assert_eq!(shape(&reparsed[0]), shape(element), "round trip of {rendered}");
        assert_eq!(reparsed[0].is_type_only, element.is_type_only);
    }
}

#[test]
fn test_wrapped_block_round_trip() {
    let original = extract(SOURCE);

    let creator = ImportCreator::new(StyleConfiguration {
        wrap_policy: WrapPolicy {
            threshold: 1,
            ..Default::default()
        },
        ..Default::default()
    });
    let text = creator.create_import_text(&[ImportElementGroup::new(original.clone(), 0)]);

    let reparsed = extract(&text);
    let expected: Vec<_> = original.iter().map(shape).collect();
    let actual: Vec<_> = reparsed.iter().map(shape).collect();
    assert_eq!(actual, expected);
}
