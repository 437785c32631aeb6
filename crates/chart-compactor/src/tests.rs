use crate::*;
use crate::pipeline::*;
use chart_core::{ChartSystem, Gender};

// ========== Normalizer ==========

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_normalize_trims_and_drops_blank_lines() {
    let input = "  년주 甲子  \n\n   \n\t월주 乙丑\t\n";
    assert_eq!(normalize(input), "년주 甲子\n월주 乙丑");
}

#[test]
fn test_normalize_drops_dash_separator() {
    let input = "Sun 10°\n──────────\nMoon 22°";
    assert_eq!(normalize(input), "Sun 10°\nMoon 22°");
}

#[test]
fn test_normalize_drops_double_line_separator_with_content() {
    let input = "══ 命盤 ══\n命宮 紫微";
    assert_eq!(normalize(input), "命宮 紫微");
}

#[test]
fn test_normalize_keeps_single_box_char() {
    assert_eq!(normalize("a ─ b"), "a ─ b");
}

#[test]
fn test_normalize_only_decoration() {
    let input = "\n──────\n   \n════════\n\n";
    assert_eq!(normalize(input), "");
}

#[test]
fn test_normalize_crlf() {
    assert_eq!(normalize("a\r\nb\r\n"), "a\nb");
}

#[test]
fn test_is_separator_line() {
    assert!(normalize::is_separator_line("──"));
    assert!(normalize::is_separator_line("x ══ y"));
    assert!(!normalize::is_separator_line("─ ═"));
}

// ========== Rules ==========

#[test]
fn test_rules_apply_in_order() {
    let forward = RuleSet::new()
        .with_rule(SubstitutionRule::literal("a_to_b", "a", "b").unwrap())
        .with_rule(SubstitutionRule::literal("b_to_c", "b", "c").unwrap());
    assert_eq!(forward.apply("a"), "c");

    let reversed = RuleSet::new()
        .with_rule(SubstitutionRule::literal("b_to_c", "b", "c").unwrap())
        .with_rule(SubstitutionRule::literal("a_to_b", "a", "b").unwrap());
    assert_eq!(reversed.apply("a"), "b");
}

#[test]
fn test_rule_replacement_is_literal() {
    let rule = SubstitutionRule::literal("currency", "USD", "$1").unwrap();
    assert_eq!(rule.apply("5 USD"), "5 $1");
}

#[test]
fn test_rule_literal_escapes_pattern() {
    let rule = SubstitutionRule::removal("dots", "...").unwrap();
    assert_eq!(rule.apply("a...b.c"), "ab.c");
}

#[test]
fn test_rule_invalid_pattern() {
    assert!(SubstitutionRule::new("bad", "(", "").is_err());
}

#[test]
fn test_collapse_whitespace_rule() {
    let rule = SubstitutionRule::collapse_whitespace();
    assert_eq!(rule.apply("a  b\t\tc\n\nd e"), "a b c d e");
    assert!(!rule.is_match("a b\nc"));
}

#[test]
fn test_every_system_collapses_last() {
    for set in [saju::rules(), ziwei::rules(), natal::rules()] {
        assert_eq!(set.names().last(), Some(&"collapse_whitespace"));
    }
}

#[test]
fn test_rule_set_sizes() {
    assert_eq!(saju::rules().len(), 5 + 1);
    assert_eq!(ziwei::rules().len(), 3 + 1);
    assert_eq!(natal::rules().len(), 12 + 4 + 1 + 1);
}

#[test]
fn test_empty_rule_set_only_normalizes() {
    let set = RuleSet::new();
    assert!(set.is_empty());
    assert_eq!(set.compress("  a  \n\n b "), "a\nb");
}

// ========== Saju ==========

#[test]
fn test_saju_empty() {
    assert_eq!(saju::compress(""), "");
}

#[test]
fn test_saju_term_and_trim() {
    assert_eq!(saju::compress("  십신: 비견  "), "신: 비견");
}

#[test]
fn test_saju_all_terms() {
    assert_eq!(saju::compress("십신 천간 지지 운성 장간"), "신 천 지 운 장");
}

#[test]
fn test_saju_table_keeps_columns() {
    let raw = "구분   천간   지지\n──────────────\n년주    甲     子\n월주    乙     丑";
    assert_eq!(saju::compress(raw), "구분 천 지\n년주 甲 子\n월주 乙 丑");
}

#[test]
fn test_saju_padding_around_terms_collapses() {
    assert_eq!(saju::compress("장간    戊 壬"), "장 戊 壬");
}

#[test]
fn test_saju_keeps_daewoon_numbers() {
    let raw = "대운  3  13  23\n1993  2003  2013";
    assert_eq!(saju::compress(raw), "대운 3 13 23\n1993 2003 2013");
}

#[test]
fn test_saju_only_separators() {
    assert_eq!(saju::compress("──────\n\n════"), "");
}

// ========== Ziwei ==========

#[test]
fn test_ziwei_empty() {
    assert_eq!(ziwei::compress(""), "");
}

#[test]
fn test_ziwei_removes_headers() {
    let raw = "十二宮\n命宮 紫微 天府\n四化: 化祿 太陽";
    assert_eq!(ziwei::compress(raw), "命宮 紫微 天府\n: 化祿 太陽");
}

#[test]
fn test_ziwei_removal_leaves_no_space() {
    assert_eq!(ziwei::compress("大限2-11 命宮"), "2-11 命宮");
}

#[test]
fn test_ziwei_keeps_stars_and_ranges() {
    let raw = "命宮  紫微  天府   大限 2-11\n兄弟宮  天機   大限 12-21";
    let out = ziwei::compress(raw);
    assert_eq!(out, "命宮 紫微 天府 2-11\n兄弟宮 天機 12-21");
}

// ========== Natal ==========

#[test]
fn test_natal_empty() {
    assert_eq!(natal::compress(""), "");
}

#[test]
fn test_natal_sign_and_orb() {
    assert_eq!(natal::compress("Sagittarius 15°23' orb 3.2°"), "Sag 15°23' @3.2°");
}

#[test]
fn test_natal_all_signs() {
    let raw = "Aries Taurus Gemini Cancer Leo Virgo Libra Scorpio Sagittarius Capricorn Aquarius Pisces";
    assert_eq!(
        natal::compress(raw),
        "Ari Tau Gem Can Leo Vir Lib Sco Sag Cap Aqu Pis"
    );
}

#[test]
fn test_natal_signs_case_sensitive() {
    assert_eq!(natal::compress("aries LIBRA"), "aries LIBRA");
}

#[test]
fn test_natal_removes_headers() {
    let raw = "Planets\nSun Aries 10°05' House 1\nMoon Cancer 22°41' House 4";
    assert_eq!(natal::compress(raw), "Sun Ari 10°05' House 1\nMoon Can 22°41' House 4");
}

#[test]
fn test_natal_aspects_block() {
    let raw = "── Major Aspects ──\nMajor Aspects\nSun trine Moon orb  1.5°\nVenus square Mars orb 0.4°";
    assert_eq!(natal::compress(raw), "Sun trine Moon @1.5°\nVenus square Mars @0.4°");
}

#[test]
fn test_natal_orb_without_whitespace_untouched() {
    assert_eq!(natal::compress("orb"), "orb");
}

#[test]
fn test_natal_angles_and_houses() {
    let raw = "Angles\nASC Libra 3°12'\nHouses\n1 Libra 3°12'";
    // the emptied "Houses" line leaves "\n\n", which collapses to one space
    assert_eq!(natal::compress(raw), "ASC Lib 3°12' 1 Lib 3°12'");
}

// ========== Assembler ==========

#[test]
fn test_assemble_all_empty_male() {
    assert_eq!(assemble("", "", "", Gender::Male), "# 남성\n");
}

#[test]
fn test_assemble_all_empty_female() {
    assert_eq!(assemble("", "", "", Gender::Female), "# 여성\n");
}

#[test]
fn test_assemble_full_order() {
    let out = assemble("s", "z", "n", Gender::Female);
    assert_eq!(out, "# 여성\n[SAJU]\ns\n\n[ZWDS]\nz\n\n[NATAL]\nn");
}

#[test]
fn test_assemble_skips_middle() {
    let out = assemble("s", "", "n", Gender::Male);
    assert_eq!(out, "# 남성\n[SAJU]\ns\n\n[NATAL]\nn");
    assert!(!out.contains("[ZWDS]"));
}

#[test]
fn test_assemble_single_section() {
    assert_eq!(assemble("", "", "n", Gender::Male), "# 남성\n[NATAL]\nn");
}

#[test]
fn test_join_sections_no_gender() {
    assert_eq!(assemble::join_sections("", "z", ""), "[ZWDS]\nz");
}

// ========== Pipeline ==========

#[test]
fn test_pipeline_compress_section_dispatch() {
    let c = FortuneCompactor::new();
    assert_eq!(c.compress_section(ChartSystem::Saju, "십신"), "신");
    assert_eq!(c.compress_section(ChartSystem::Ziwei, "四化 化科"), "化科");
    assert_eq!(c.compress_section(ChartSystem::Natal, "Leo orb 1°"), "Leo @1°");
}

#[test]
fn test_pipeline_full_payload() {
    let r = FortuneCompactor::new().compress(
        "  십신: 비견  ",
        "十二宮\n命宮 紫微",
        "Sagittarius 15°23' orb 3.2°",
        Gender::Female,
    );
    assert_eq!(r.output, "# 여성\n[SAJU]\n신: 비견\n\n[ZWDS]\n命宮 紫微\n\n[NATAL]\nSag 15°23' @3.2°");
    assert_eq!(r.sections, vec![ChartSystem::Saju, ChartSystem::Ziwei, ChartSystem::Natal]);
    assert_eq!(r.compressed_len, r.output.len());
}

#[test]
fn test_pipeline_decoration_only_section_omitted() {
    let r = FortuneCompactor::new().compress("──────\n\n══════", "", "Leo 1°", Gender::Male);
    assert_eq!(r.output, "# 남성\n[NATAL]\nLeo 1°");
    assert!(!r.contains(ChartSystem::Saju));
    assert!(!r.contains(ChartSystem::Ziwei));
    assert!(r.contains(ChartSystem::Natal));
}

#[test]
fn test_pipeline_stats() {
    let saju = "십신      비견     겁재\n──────────────────\n천간      甲       乙";
    let r = FortuneCompactor::new().compress(saju, "", "", Gender::Male);
    assert_eq!(r.original_len, saju.len());
    assert!(r.reduction_pct > 0.0);
    assert!(r.ratio() < 1.0);
    assert_eq!(r.estimated_tokens, r.output.len() / 4);
    assert_eq!(r.section_stats.len(), 3);
    assert_eq!(r.section_stats[0].system, ChartSystem::Saju);
    assert_eq!(r.section_stats[1].compressed_len, 0);
}

#[test]
fn test_pipeline_empty_input() {
    let r = FortuneCompactor::new().compress("", "", "", Gender::Female);
    assert_eq!(r.output, "# 여성\n");
    assert!(r.sections.is_empty());
    assert_eq!(r.ratio(), 1.0);
    assert_eq!(r.reduction_pct, 0.0);
}

#[test]
fn test_compress_fortune_text() {
    let out = compress_fortune_text("지지 子", "", "", Gender::Male);
    assert_eq!(out, "# 남성\n[SAJU]\n지 子");
}

#[test]
fn test_estimate_tokens() {
    assert_eq!(estimate_tokens(""), 0);
    assert_eq!(estimate_tokens("abcdefgh"), 2);
}
