use super::*;
use crate::types::Country;
use std::fs;
use tempfile::TempDir;

fn registry(locale: &str, pairs: &[(&str, &str)]) -> CountryRegistry {
    CountryRegistry::new(
        locale,
        pairs
            .iter()
            .map(|(code, name)| Country::new(*code, *name))
            .collect(),
    )
}

#[test]
fn test_short_locale() {
    assert_eq!(short_locale("pt-BR"), "ptbr");
    assert_eq!(short_locale("zh-CN"), "zhcn");
    assert_eq!(short_locale("de"), "de");
}

#[test]
fn test_name_code_map_follows_name_order_for_any_input_order() {
    let a = registry("en", &[("FR", "France"), ("DE", "Germany")]);
    let b = registry("en", &[("DE", "Germany"), ("FR", "France")]);

    let rendered_a = name_code_map(&a, ExportStyle::Factory).render();
    let rendered_b = name_code_map(&b, ExportStyle::Factory).render();

    assert_eq!(rendered_a, rendered_b);
    assert_eq!(
        rendered_a,
        "export default () => ({\n  'France': 'FR',\n  'Germany': 'DE'\n})\n"
    );
}

#[test]
fn test_code_name_map_in_code_order() {
    let reg = registry("de", &[("US", "Vereinigte Staaten"), ("AT", "Osterreich")]);
    assert_eq!(
        code_name_map(&reg, ExportStyle::Factory).render(),
        "export default () => ({\n  AT: 'Osterreich',\n  US: 'Vereinigte Staaten'\n})\n"
    );
}

#[test]
fn test_name_list_in_name_order() {
    let reg = registry("en", &[("DE", "Germany"), ("AT", "Austria"), ("FR", "France")]);
    let module = name_list(&reg, ExportStyle::Factory);
    assert_eq!(
        module.literal,
        JsLiteral::Array(vec![
            "Austria".to_string(),
            "France".to_string(),
            "Germany".to_string()
        ])
    );
}

#[test]
fn test_code_list_sorts_and_dedups() {
    let module = code_list(["FR", "DE", "FR", "AT"], ExportStyle::Factory);
    assert_eq!(
        module.render(),
        "export default () => ([\n  'AT',\n  'DE',\n  'FR'\n])\n"
    );
}

#[test]
fn test_apostrophe_name_stays_inside_literal() {
    let reg = registry("fr", &[("CI", "Côte d'Ivoire")]);

    let by_code = code_name_map(&reg, ExportStyle::Factory).render();
    let by_name = name_code_map(&reg, ExportStyle::Factory).render();
    let names = name_list(&reg, ExportStyle::Factory).render();

    assert!(by_code.contains(r"CI: 'Côte d\'Ivoire'"));
    assert!(by_name.contains(r"'Côte d\'Ivoire': 'CI'"));
    assert!(names.contains(r"'Côte d\'Ivoire'"));

    // Every line holds an even number of unescaped quotes
    for text in [&by_code, &by_name, &names] {
        for line in text.lines() {
            let unescaped = line.replace("\\\\", "").replace("\\'", "");
            assert_eq!(unescaped.matches('\'').count() % 2, 0, "broken line: {line}");
        }
    }
}

#[test]
fn test_emit_locale_nested_layout() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("js");
    let emitter = Emitter::new(&out, OutputLayout::Nested, ExportStyle::Factory);
    let reg = registry("pt-BR", &[("BR", "Brasil"), ("PT", "Portugal")]);

    let written = emitter.emit_locale(&reg).unwrap();

    let dir = out.join("ptbr");
    assert_eq!(
        written,
        vec![
            dir.join(CODE_NAME_FILE),
            dir.join(NAME_CODE_FILE),
            dir.join(NAMES_FILE)
        ]
    );
    assert_eq!(
        fs::read_to_string(dir.join(NAMES_FILE)).unwrap(),
        "export default () => ([\n  'Brasil',\n  'Portugal'\n])\n"
    );
}

#[test]
fn test_emit_locale_flat_layout() {
    let tmp = TempDir::new().unwrap();
    let emitter = Emitter::new(tmp.path(), OutputLayout::Flat, ExportStyle::Object);
    let reg = registry("zh-CN", &[("CN", "中国")]);

    let written = emitter.emit_locale(&reg).unwrap();

    assert_eq!(written, vec![tmp.path().join("country-zhcn.js")]);
    assert_eq!(
        fs::read_to_string(&written[0]).unwrap(),
        "export default {\n  CN: '中国'\n}\n"
    );
}

#[test]
fn test_emit_overwrites_existing_files() {
    let tmp = TempDir::new().unwrap();
    let emitter = Emitter::new(tmp.path(), OutputLayout::Nested, ExportStyle::Factory);

    emitter
        .emit_locale(&registry("en", &[("DE", "Germany"), ("FR", "France")]))
        .unwrap();
    emitter
        .emit_locale(&registry("en", &[("IT", "Italy")]))
        .unwrap();

    assert_eq!(
        fs::read_to_string(tmp.path().join("en").join(CODE_NAME_FILE)).unwrap(),
        "export default () => ({\n  IT: 'Italy'\n})\n"
    );
}

#[test]
fn test_emit_codes_at_root() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("js");
    let emitter = Emitter::new(&out, OutputLayout::Nested, ExportStyle::Factory);

    let path = emitter.emit_codes(["US", "DE"]).unwrap();

    assert_eq!(path, out.join(CODES_FILE));
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "export default () => ([\n  'DE',\n  'US'\n])\n"
    );
}
