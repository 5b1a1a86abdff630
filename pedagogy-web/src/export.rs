//! Binding to the page's jsPDF script for reflection exports.

use js_sys::{Array, Function, Reflect};
use pedagogy_core::{ExportError, ExportRequest, Exporter};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

const MARGIN_MM: f64 = 20.0;
const TEXT_WIDTH_MM: f64 = 170.0;

#[derive(Serialize)]
struct PdfOptions {
    orientation: &'static str,
    unit: &'static str,
    format: &'static str,
}

/// Uses `window.jspdf.jsPDF`, loaded by the host page.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsPdfExporter;

impl Exporter for JsPdfExporter {
    fn export(&self, request: &ExportRequest) -> Result<(), ExportError> {
        let ctor = jspdf_constructor()?;
        let options = serde_wasm_bindgen::to_value(&PdfOptions {
            orientation: "portrait",
            unit: "mm",
            format: "a4",
        })
        .map_err(|err| ExportError::Failed(err.to_string()))?;
        let doc = Reflect::construct(&ctor, &Array::of1(&options)).map_err(failed)?;

        invoke(&doc, "setFontSize", &[JsValue::from_f64(20.0)])?;
        invoke(
            &doc,
            "text",
            &[
                JsValue::from_str(&request.title),
                JsValue::from_f64(MARGIN_MM),
                JsValue::from_f64(25.0),
            ],
        )?;
        invoke(&doc, "setFontSize", &[JsValue::from_f64(11.0)])?;
        invoke(
            &doc,
            "text",
            &[
                JsValue::from_str(&request.date),
                JsValue::from_f64(MARGIN_MM),
                JsValue::from_f64(34.0),
            ],
        )?;
        let lines = invoke(
            &doc,
            "splitTextToSize",
            &[
                JsValue::from_str(&request.notes),
                JsValue::from_f64(TEXT_WIDTH_MM),
            ],
        )?;
        invoke(
            &doc,
            "text",
            &[lines, JsValue::from_f64(MARGIN_MM), JsValue::from_f64(46.0)],
        )?;
        invoke(&doc, "save", &[JsValue::from_str(&request.file_name())])?;
        Ok(())
    }
}

fn failed(err: JsValue) -> ExportError {
    ExportError::Failed(crate::dom::js_error_message(&err))
}

fn jspdf_constructor() -> Result<Function, ExportError> {
    let namespace = Reflect::get(&js_sys::global(), &JsValue::from_str("jspdf"))
        .ok()
        .filter(|ns| !ns.is_undefined() && !ns.is_null())
        .ok_or_else(|| ExportError::Unavailable("window.jspdf is not loaded".to_string()))?;
    Reflect::get(&namespace, &JsValue::from_str("jsPDF"))
        .ok()
        .and_then(|ctor| ctor.dyn_into::<Function>().ok())
        .ok_or_else(|| ExportError::Unavailable("jspdf.jsPDF is not a constructor".to_string()))
}

fn invoke(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, ExportError> {
    let func = Reflect::get(target, &JsValue::from_str(method))
        .map_err(failed)?
        .dyn_into::<Function>()
        .map_err(|_| ExportError::Failed(format!("jsPDF has no `{method}` method")))?;
    let args: Array = args.iter().collect();
    Reflect::apply(&func, target, &args).map_err(failed)
}
