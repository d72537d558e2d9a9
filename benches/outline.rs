//! Benchmarks for outline classification and extraction
//!
//! Run with: cargo bench outline

use outliner::config::{DuplicatePolicy, NestingStrategy, OutlineConfig};
use outliner::model::Document;
use outliner::outline::{classify, extract_outline, OutlineBuilder};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const SAMPLE: &str = include_str!("../samples/outline_sample.ts");

fn repeated_sample(copies: usize) -> String {
    SAMPLE.repeat(copies)
}

// ============================================================================
// Classification
// ============================================================================

#[divan::bench]
fn classify_declaration_lines() {
    for line in [
        "export class Foo extends Bar {",
        "  export function unit(): Circle {",
        "    constructor(radius: number) {",
        "export const VERSION = \"1.0.0\";",
        "    private label?: string = \"circle\";",
        "export enum Direction {",
        "type Point = { x: number; y: number };",
    ] {
        divan::black_box(classify(divan::black_box(line)));
    }
}

#[divan::bench]
fn classify_statement_lines() {
    for line in [
        "  if (doubled.length === 0) {",
        "      return Math.PI * this.radius * this.radius;",
        "  items.forEach((item) => {",
        "",
        "}",
    ] {
        divan::black_box(classify(divan::black_box(line)));
    }
}

// ============================================================================
// Extraction
// ============================================================================

#[divan::bench(args = [1, 10, 100])]
fn build_brace_depth(bencher: divan::Bencher, copies: usize) {
    let text = repeated_sample(copies);
    let builder = OutlineBuilder::new();
    bencher.bench(|| builder.build(divan::black_box(text.lines())));
}

#[divan::bench(args = [1, 10, 100])]
fn build_indentation(bencher: divan::Bencher, copies: usize) {
    let text = repeated_sample(copies);
    let builder = OutlineBuilder::new().with_nesting(NestingStrategy::Indentation);
    bencher.bench(|| builder.build(divan::black_box(text.lines())));
}

#[divan::bench(args = [1, 10, 100])]
fn build_with_dedup(bencher: divan::Bencher, copies: usize) {
    let text = repeated_sample(copies);
    let builder = OutlineBuilder::new().with_duplicates(DuplicatePolicy::DropRepeated);
    bencher.bench(|| builder.build(divan::black_box(text.lines())));
}

#[divan::bench(args = [10, 100])]
fn extract_from_rope(bencher: divan::Bencher, copies: usize) {
    let doc = Document::with_text(&repeated_sample(copies));
    let config = OutlineConfig::default();
    bencher.bench(|| extract_outline(divan::black_box(&doc), &config, doc.revision));
}
