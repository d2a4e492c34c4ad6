//! PDF attachment limits.

use cdg_core::settings::UploadSettings;
use cdg_intake::{UploadPlan, UploadRejection, UploadValidator, UploadedFile};
use proptest::prelude::*;

const MB: u64 = 1024 * 1024;

fn pdf(size: u64) -> UploadedFile {
    UploadedFile::new("pedido.pdf", "application/pdf", size)
}

#[test]
fn empty_batch() {
    let v = UploadValidator::default();
    let err = v.validate_batch(&[]).unwrap_err();
    assert_eq!(err, UploadRejection::Empty);
    assert_eq!(err.to_string(), "Pelo menos um arquivo PDF é obrigatório");
}

#[test]
fn per_file_errors_are_numbered() {
    let v = UploadValidator::default();
    let files = [
        pdf(MB),
        UploadedFile::new("foto.png", "image/png", MB),
        pdf(250 * MB),
    ];
    let err = v.validate_batch(&files).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Arquivo 2: Apenas arquivos PDF são permitidos; \
         Arquivo 3: Arquivo muito grande. Tamanho máximo: 200 MB. Tamanho atual: 250 MB"
    );
}

#[test]
fn total_size_limit() {
    let v = UploadValidator::default();
    let files = [pdf(150 * MB), pdf(150 * MB), pdf(150 * MB), pdf(150 * MB)];
    let err = v.validate_batch(&files).unwrap_err();
    assert_eq!(
        err,
        UploadRejection::Invalid(vec![
            "Tamanho total dos arquivos muito grande. Máximo: 500 MB. Total atual: 600 MB"
                .to_string()
        ])
    );
}

#[test]
fn base64_overhead_can_reject_a_valid_batch() {
    let v = UploadValidator::default();
    // 400 MiB fits the batch limit, but 532 MiB encoded does not.
    let files = [pdf(200 * MB), pdf(200 * MB)];
    assert_eq!(v.validate_batch(&files), Ok(400 * MB));
    let err = v.validate_for_upload(&files).unwrap_err();
    assert!(matches!(err, UploadRejection::EncodedTooLarge { .. }));
    assert!(err
        .to_string()
        .starts_with("Após conversão para base64, os arquivos ficarão muito grandes."));
}

#[test]
fn accepted_upload() {
    let v = UploadValidator::default();
    assert_eq!(
        v.validate_for_upload(&[pdf(100), pdf(200)]),
        Ok(UploadPlan {
            total_size: 300,
            estimated_size: 399
        })
    );
}

#[test]
fn limits_follow_settings() {
    let v = UploadValidator::new(UploadSettings {
        max_file_size: 10 * MB,
        max_total_size: 20 * MB,
    });
    let json = serde_json::to_value(v.limits()).unwrap();
    assert_eq!(json["max_file_size_formatted"], "10 MB");
    assert_eq!(json["max_total_size_formatted"], "20 MB");
    assert_eq!(json["allowed_extensions"][0], ".pdf");
    assert!(v.validate_single_file(&pdf(11 * MB)).is_err());
}

proptest! {
    #[test]
    fn small_pdf_batches_pass(sizes in prop::collection::vec(1u64..=(100 * MB), 1..4)) {
        let files: Vec<_> = sizes.iter().map(|&s| pdf(s)).collect();
        let plan = UploadValidator::default().validate_for_upload(&files);
        let plan = plan.unwrap();
        prop_assert_eq!(plan.total_size, sizes.iter().sum::<u64>());
        prop_assert!(plan.estimated_size >= plan.total_size);
    }
}
