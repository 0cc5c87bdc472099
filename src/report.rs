use crate::models::DiscrepancyRecord;
use csv::Writer;
use std::io::Write;

const HEADER: [&str; 6] = [
    "material_codigo",
    "material_descricao",
    "qtd_plano",
    "qtd_nf",
    "qtd_recebida",
    "tipo_divergencia",
];

/// 导出对账差异到 CSV (差异类型用界面描述, 逗号分隔)
pub fn write_csv<W: Write>(records: &[DiscrepancyRecord], output: W) -> Result<W, csv::Error> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(HEADER)?;

    for record in records {
        let tags = record
            .tags
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ");

        writer.write_record(&[
            record.material_code.clone(),
            record.material_description.clone(),
            record.planned.to_string(),
            record.invoiced.to_string(),
            record.received.to_string(),
            tags,
        ])?;
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error().into())
}
