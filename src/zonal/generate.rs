use crate::zonal::Result;
use crate::zonal::coords::ZonalCoords;
use serde::Serialize;
use tera::{Context, Tera};

const TARGETS_TEMPLATE: &str = "zonal/targets.js.tera";
const COORDS_TEMPLATE: &str = "zonal/coords.js.tera";

/// Templates are embedded so the binary doesn't depend on the working directory.
pub fn create_tera_renderer() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (
            TARGETS_TEMPLATE,
            include_str!("../../templates/zonal/targets.js.tera"),
        ),
        (
            COORDS_TEMPLATE,
            include_str!("../../templates/zonal/coords.js.tera"),
        ),
    ])?;

    Ok(tera)
}

#[derive(Serialize)]
struct CoordsModule<'a> {
    source_name: &'a str,
    coords: &'a [ZonalCoords],
}

/// Render the JS module exporting `ZONAL_TARGETS` and `isTargetClient`.
pub fn render_targets_module(tera: &Tera, source_name: &str, targets: &[String]) -> Result<String> {
    let mut context = Context::new();
    context.insert("source_name", source_name);
    context.insert("targets", &serde_json::to_string_pretty(targets)?);

    Ok(tera.render(TARGETS_TEMPLATE, &context)?)
}

/// Render the JS module exporting `ZONAL_COORDS`, `getZonalCoords` and `getAllZonalCoords`.
pub fn render_coords_module(
    tera: &Tera,
    source_name: &str,
    coords: &[ZonalCoords],
) -> Result<String> {
    let context = Context::from_serialize(CoordsModule {
        source_name,
        coords,
    })?;

    Ok(tera.render(COORDS_TEMPLATE, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE_NAME: &str = "zonal.csv";

    fn get_targets() -> Vec<String> {
        vec!["0001234".to_owned(), "0005678".to_owned()]
    }

    // region render_targets_module
    #[test]
    fn should_render_targets_module() {
        let tera = create_tera_renderer().unwrap();

        let result = render_targets_module(&tera, SOURCE_NAME, &get_targets()).unwrap();

        assert!(result.starts_with("// Generated by zonal-targets from zonal.csv. Do not edit.\n"));
        assert!(result.contains(
            "export const ZONAL_TARGETS = [\n  \"0001234\",\n  \"0005678\"\n];\n"
        ));
        assert!(result.contains("export const isTargetClient = (numeroCliente) => {"));
        assert!(result.contains("return TARGET_SET.has(String(num));"));
    }

    #[test]
    fn should_render_empty_targets_module() {
        let tera = create_tera_renderer().unwrap();

        let result = render_targets_module(&tera, SOURCE_NAME, &[]).unwrap();

        assert!(result.contains("export const ZONAL_TARGETS = [];\n"));
    }

    #[test]
    fn should_escape_targets() {
        let tera = create_tera_renderer().unwrap();
        let targets = vec!["12\"34".to_owned(), "<b>56</b>".to_owned()];

        let result = render_targets_module(&tera, SOURCE_NAME, &targets).unwrap();

        assert!(result.contains(r#""12\"34""#));
        assert!(result.contains(r#""<b>56</b>""#));
    }

    #[test]
    fn should_render_same_targets_module_twice() {
        let tera = create_tera_renderer().unwrap();

        let first = render_targets_module(&tera, SOURCE_NAME, &get_targets()).unwrap();
        let second = render_targets_module(&tera, SOURCE_NAME, &get_targets()).unwrap();

        assert_eq!(first, second);
    }
    // endregion

    // region render_coords_module
    #[test]
    fn should_render_coords_module() {
        let tera = create_tera_renderer().unwrap();
        let coords = vec![
            ZonalCoords::new("0001234".to_owned(), -33.45, -70.66),
            ZonalCoords::new("0005678".to_owned(), -35.42, -71.65),
        ];

        let result = render_coords_module(&tera, SOURCE_NAME, &coords).unwrap();

        assert!(result.contains("// Total: 2 zonal records with coordinates\n"));
        assert!(result.contains(
            "export const ZONAL_COORDS = [\n  { numeroCliente: \"0001234\", latitud: -33.45, longitud: -70.66 },\n  { numeroCliente: \"0005678\", latitud: -35.42, longitud: -71.65 }\n];\n"
        ));
        assert!(result.contains("export const getZonalCoords = (numeroCliente) => {"));
        assert!(result.contains("export const getAllZonalCoords = () => ZONAL_COORDS;"));
    }

    #[test]
    fn should_render_empty_coords_module() {
        let tera = create_tera_renderer().unwrap();

        let result = render_coords_module(&tera, SOURCE_NAME, &[]).unwrap();

        assert!(result.contains("// Total: 0 zonal records with coordinates\n"));
        assert!(result.contains("export const ZONAL_COORDS = [\n];\n"));
    }
    // endregion
}
