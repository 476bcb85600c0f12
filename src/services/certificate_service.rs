//! Certificate integrity stamp: control code and QR payload.

use crate::error::Result;
use crate::models::training::ExamResult;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDate;
use image::Luma;
use qrcode::{EcLevel, QrCode};
use sha2::{Digest, Sha256};

/// Constant product tag mixed into the control-code preimage.
pub const PRODUCT_TAG: &str = "POL2KST";

pub struct CertificateService;

impl CertificateService {
    /// SHA-256 control code over the certificate fields and the shared
    /// secret. Deterministic for the same record; any field change produces
    /// an unrelated code.
    ///
    /// The secret is a static configuration value, so this is a tamper hint,
    /// not a security-grade signature.
    pub fn control_hash(
        training_id: i64,
        full_name: &str,
        exam_date: NaiveDate,
        result: ExamResult,
        secret: &str,
    ) -> String {
        let preimage = format!(
            "{}|{}|{}|{}|{}|{}",
            training_id,
            full_name,
            exam_date.format("%Y-%m-%d"),
            result.label(),
            PRODUCT_TAG,
            secret,
        );
        hex::encode(Sha256::digest(preimage.as_bytes()))
    }

    /// Human-readable multi-line text embedded in the QR code.
    pub fn qr_payload(
        org_name: &str,
        training_id: i64,
        full_name: &str,
        exam_date: NaiveDate,
        result: ExamResult,
        percent: f64,
        control_hash: &str,
    ) -> String {
        format!(
            "{}\nСвидетельство № {}\nФИО: {}\nДата экзамена: {}\nРезультат: {} ({:.1} %)\nКонтрольный код: {}",
            org_name,
            training_id,
            full_name,
            exam_date.format("%d.%m.%Y"),
            result.label(),
            percent,
            control_hash,
        )
    }

    /// Render `data` as a QR bitmap (error-correction level M, enough to
    /// survive print/scan degradation) and return it as a base64 PNG for
    /// `<img src="data:image/png;base64,...">` embedding.
    pub fn qr_png_base64(data: &str) -> Result<String> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)?;
        let bitmap = code
            .render::<Luma<u8>>()
            .min_dimensions(240, 240)
            .build();

        let mut png = Vec::new();
        bitmap.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)?;
        Ok(STANDARD.encode(png))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn control_hash_is_deterministic() {
        let a = CertificateService::control_hash(7, "Иванов Иван", exam_date(), ExamResult::Positive, "secret");
        let b = CertificateService::control_hash(7, "Иванов Иван", exam_date(), ExamResult::Positive, "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn control_hash_changes_with_any_field()  {
        let base = CertificateService::control_hash(7, "Иванов Иван", exam_date(), ExamResult::Positive, "secret");

        let other_id = CertificateService::control_hash(8, "Иванов Иван", exam_date(), ExamResult::Positive, "secret");
        let other_name = CertificateService::control_hash(7, "Петров Пётр", exam_date(), ExamResult::Positive, "secret");
        let other_date = CertificateService::control_hash(
            7,
            "Иванов Иван",
            NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
            ExamResult::Positive,
            "secret",
        );
        let other_result = CertificateService::control_hash(7, "Иванов Иван", exam_date(), ExamResult::Negative, "secret");
        let other_secret = CertificateService::control_hash(7, "Иванов Иван", exam_date(), ExamResult::Positive, "another");

        for other in [other_id, other_name, other_date, other_result, other_secret] {
            assert_ne!(base, other);
        }
    }

    #[test]
    fn qr_payload_embeds_certificate_fields() {
        let payload = CertificateService::qr_payload(
            "КГП \"Поликлиника № 2 города Костанай\"",
            7,
            "Иванов Иван",
            exam_date(),
            ExamResult::Positive,
            80.0,
            "abc123",
        );

        assert!(payload.starts_with("КГП \"Поликлиника № 2 города Костанай\"\n"));
        assert!(payload.contains("Свидетельство № 7"));
        assert!(payload.contains("ФИО: Иванов Иван"));
        assert!(payload.contains("Дата экзамена: 10.03.2025"));
        assert!(payload.contains("Результат: Положительный (80.0 %)"));
        assert!(payload.ends_with("Контрольный код: abc123"));
    }

    #[test]
    fn qr_code_encodes_a_full_payload_as_png() {
        // Realistic payload size: multi-line text plus a 64-char hash.
        let hash = "a".repeat(64);
        let payload = CertificateService::qr_payload(
            "КГП \"Поликлиника № 2 города Костанай\"",
            42,
            "Иванов Иван Иванович",
            exam_date(),
            ExamResult::Positive,
            93.3,
            &hash,
        );

        let encoded = CertificateService::qr_png_base64(&payload).unwrap();
        let bytes = STANDARD.decode(encoded).unwrap();
        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
