use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexSet;
use std::collections::HashMap;

use crate::error::ReconcileError;
use crate::models::{DiscrepancyRecord, DiscrepancyTag, MaterialId, MaterialInfo, QuantityMap};

/// 物料信息查询 - 由调用方提供, 错误原样向上传递
pub trait MaterialLookup {
    type Error;

    fn resolve(&self, material_id: MaterialId) -> Result<MaterialInfo, Self::Error>;
}

impl MaterialLookup for HashMap<MaterialId, MaterialInfo> {
    type Error = ReconcileError;

    fn resolve(&self, material_id: MaterialId) -> Result<MaterialInfo, Self::Error> {
        self.get(&material_id)
            .cloned()
            .ok_or(ReconcileError::UnresolvedMaterial { material_id })
    }
}

/// 三方对账: 计划 vs 发票 vs 实收
///
/// 物料集合为三个来源键的并集 (按 计划 -> 发票 -> 实收 的首次出现顺序),
/// 缺失按 0 处理。三者完全相等的物料不输出。
pub fn reconcile<L: MaterialLookup>(
    planned: &QuantityMap,
    invoiced: &QuantityMap,
    received: &QuantityMap,
    lookup: &L,
) -> Result<Vec<DiscrepancyRecord>, L::Error> {
    let all_materials: IndexSet<MaterialId> = planned
        .material_ids()
        .chain(invoiced.material_ids())
        .chain(received.material_ids())
        .collect();

    let mut records = Vec::new();
    for material_id in all_materials {
        let qp = planned.get(material_id);
        let qi = invoiced.get(material_id);
        let qr = received.get(material_id);

        let tags = classify(&qp, &qi, &qr);
        if tags.is_empty() {
            continue;
        }

        let info = lookup.resolve(material_id)?;
        records.push(DiscrepancyRecord {
            material_code: info.code,
            material_description: info.description,
            planned: qp,
            invoiced: qi,
            received: qr,
            tags,
        });
    }

    Ok(records)
}

/// 判定差异类型; 三者相等时返回空列表
pub fn classify(qp: &BigDecimal, qi: &BigDecimal, qr: &BigDecimal) -> Vec<DiscrepancyTag> {
    let mut tags = Vec::new();
    if qp == qi && qi == qr {
        return tags;
    }

    if qr > qi {
        tags.push(DiscrepancyTag::ReceivedMoreThanInvoiced);
    } else if qr < qi {
        tags.push(DiscrepancyTag::ReceivedLessThanInvoiced);
    }

    if qi != qp {
        tags.push(DiscrepancyTag::InvoiceDiffersFromPlan);
    }

    if *qr > BigDecimal::zero() && qp.is_zero() {
        tags.push(DiscrepancyTag::MaterialNotInPlan);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn qmap(entries: &[(MaterialId, &str)]) -> QuantityMap {
        entries.iter().map(|(id, q)| (*id, dec(q))).collect()
    }

    fn materials(ids: &[MaterialId]) -> HashMap<MaterialId, MaterialInfo> {
        ids.iter()
            .map(|id| (*id, MaterialInfo::new(format!("MAT-{id}"), format!("Material {id}"))))
            .collect()
    }

    #[test]
    fn test_all_equal_yields_no_records() {
        let planned = qmap(&[(1, "10"), (2, "5")]);
        let invoiced = qmap(&[(1, "10"), (2, "5")]);
        let received = qmap(&[(1, "10"), (2, "5")]);

        let records = reconcile(&planned, &invoiced, &received, &materials(&[1, 2])).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invoice_differs_from_plan() {
        let records = reconcile(
            &qmap(&[(1, "10")]),
            &qmap(&[(1, "8")]),
            &qmap(&[(1, "8")]),
            &materials(&[1]),
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.material_code, "MAT-1");
        assert_eq!(r.material_description, "Material 1");
        assert_eq!(r.planned, dec("10"));
        assert_eq!(r.invoiced, dec("8"));
        assert_eq!(r.received, dec("8"));
        assert_eq!(r.tags, vec![DiscrepancyTag::InvoiceDiffersFromPlan]);
    }

    #[test]
    fn test_material_only_received() {
        let records = reconcile(
            &QuantityMap::new(),
            &QuantityMap::new(),
            &qmap(&[(9, "3")]),
            &materials(&[9]),
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.planned, BigDecimal::zero());
        assert_eq!(r.invoiced, BigDecimal::zero());
        assert_eq!(r.received, dec("3"));
        assert_eq!(
            r.tags,
            vec![
                DiscrepancyTag::ReceivedMoreThanInvoiced,
                DiscrepancyTag::MaterialNotInPlan,
            ]
        );
    }

    #[test]
    fn test_unplanned_and_uninvoiced_does_not_flag_invoice_vs_plan() {
        // 计划与发票同为 0, 二者一致
        let tags = classify(&BigDecimal::zero(), &BigDecimal::zero(), &dec("3"));
        assert!(!tags.contains(&DiscrepancyTag::InvoiceDiffersFromPlan));
        assert_eq!(
            tags,
            vec![DiscrepancyTag::ReceivedMoreThanInvoiced, DiscrepancyTag::MaterialNotInPlan]
        );
    }

    #[test]
    fn test_received_less_than_invoiced() {
        let records = reconcile(
            &qmap(&[(1, "10")]),
            &qmap(&[(1, "10")]),
            &qmap(&[(1, "7")]),
            &materials(&[1]),
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].received, dec("7"));
        assert_eq!(records[0].tags, vec![DiscrepancyTag::ReceivedLessThanInvoiced]);
    }

    #[test]
    fn test_absent_equals_explicit_zero() {
        let lookup = materials(&[4]);
        let implicit = reconcile(
            &QuantityMap::new(),
            &QuantityMap::new(),
            &qmap(&[(4, "5")]),
            &lookup,
        )
        .unwrap();
        let explicit = reconcile(
            &qmap(&[(4, "0")]),
            &qmap(&[(4, "0")]),
            &qmap(&[(4, "5")]),
            &lookup,
        )
        .unwrap();

        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_explicit_zero_everywhere_is_skipped() {
        let zero = qmap(&[(1, "0")]);
        let records = reconcile(&zero, &QuantityMap::new(), &QuantityMap::new(), &materials(&[]))
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_decimal_scale_does_not_matter() {
        let records = reconcile(
            &qmap(&[(1, "10.0")]),
            &qmap(&[(1, "10.00")]),
            &qmap(&[(1, "10")]),
            &materials(&[1]),
        )
        .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_small_decimal_difference_is_reported() {
        let records = reconcile(
            &qmap(&[(1, "0.3")]),
            &qmap(&[(1, "0.3")]),
            &qmap(&[(1, "0.30000000000000004")]),
            &materials(&[1]),
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tags, vec![DiscrepancyTag::ReceivedMoreThanInvoiced]);
    }

    #[test]
    fn test_unresolved_material_is_an_error() {
        let err = reconcile(
            &qmap(&[(1, "10"), (2, "4")]),
            &qmap(&[(1, "10"), (2, "4")]),
            &qmap(&[(1, "10"), (2, "1")]),
            &materials(&[1]),
        )
        .unwrap_err();

        assert_eq!(err, ReconcileError::UnresolvedMaterial { material_id: 2 });
    }

    #[test]
    fn test_lookup_error_propagates_verbatim() {
        struct Failing;
        impl MaterialLookup for Failing {
            type Error = String;
            fn resolve(&self, material_id: MaterialId) -> Result<MaterialInfo, String> {
                Err(format!("lookup failed for {material_id}"))
            }
        }

        let err = reconcile(&qmap(&[(3, "1")]), &QuantityMap::new(), &QuantityMap::new(), &Failing)
            .unwrap_err();
        assert_eq!(err, "lookup failed for 3");
    }

    #[test]
    fn test_union_covers_every_source_once() {
        let planned = qmap(&[(1, "5"), (2, "5")]);
        let invoiced = qmap(&[(2, "4"), (3, "2")]);
        let received = qmap(&[(3, "2"), (1, "1"), (4, "6")]);

        let records = reconcile(&planned, &invoiced, &received, &materials(&[1, 2, 3, 4])).unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.material_code.as_str()).collect();
        let unique: HashSet<&str> = codes.iter().copied().collect();

        assert_eq!(codes.len(), 4);
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let planned = qmap(&[(1, "5"), (2, "5")]);
        let invoiced = qmap(&[(2, "4"), (3, "2")]);
        let received = qmap(&[(3, "1"), (1, "5")]);
        let lookup = materials(&[1, 2, 3]);

        let first = reconcile(&planned, &invoiced, &received, &lookup).unwrap();
        let second = reconcile(&planned, &invoiced, &received, &lookup).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_unequal_triple_is_tagged() {
        let values = ["0", "1", "2", "2.5"];
        for p in values {
            for i in values {
                for r in values {
                    let tags = classify(&dec(p), &dec(i), &dec(r));
                    let all_equal = p == i && i == r;

                    assert_eq!(tags.is_empty(), all_equal, "triple ({p}, {i}, {r})");
                    assert!(
                        !(tags.contains(&DiscrepancyTag::ReceivedMoreThanInvoiced)
                            && tags.contains(&DiscrepancyTag::ReceivedLessThanInvoiced)),
                        "triple ({p}, {i}, {r})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_tag_order_is_fixed() {
        let tags = classify(&dec("0"), &dec("4"), &dec("2"));
        assert_eq!(
            tags,
            vec![
                DiscrepancyTag::ReceivedLessThanInvoiced,
                DiscrepancyTag::InvoiceDiffersFromPlan,
                DiscrepancyTag::MaterialNotInPlan,
            ]
        );
    }
}
