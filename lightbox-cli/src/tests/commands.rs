//! End-to-end tests running each subcommand against an in-memory writer.

use super::helpers::DataFiles;
use super::*;
use crate::export::{ExportArgs, run_export_with};
use crate::favorite::{FavoriteArgs, run_favorite_with};
use crate::list::{ListArgs, run_list_with};
use crate::show::{ShowArgs, run_show_with};
use rstest::rstest;

fn capture(run: impl FnOnce(&mut dyn std::io::Write) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    run(&mut out).expect("command should succeed");
    String::from_utf8(out).expect("utf-8 output")
}

#[rstest]
fn list_sorts_by_title_by_default() {
    let files = DataFiles::new();
    let args = ListArgs {
        data_dir: Some(files.root().to_path_buf()),
        ..ListArgs::default()
    };
    let output = capture(|out| run_list_with(args, out));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "  img-archive  Archive print",
            "  img-aurora  Aurora over the fjord",
            "  img-vault  Vault door",
        ]
    );
}

#[rstest]
fn list_marks_favorited_images() {
    let files = DataFiles::with_favorites(r#"["img-aurora"]"#);
    let args = ListArgs {
        data_dir: Some(files.root().to_path_buf()),
        ..ListArgs::default()
    };
    let output = capture(|out| run_list_with(args, out));
    assert!(output.contains("* img-aurora  Aurora over the fjord"));
    assert!(output.contains("  img-vault  Vault door"));
}

#[rstest]
fn list_orders_by_view_count_when_asked() {
    let files = DataFiles::new();
    let args = ListArgs {
        data_dir: Some(files.root().to_path_buf()),
        sort: Some(String::from("views")),
        ..ListArgs::default()
    };
    let output = capture(|out| run_list_with(args, out));
    let ids: Vec<&str> = output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, ["img-archive", "img-vault", "img-aurora"]);
}

#[rstest]
fn list_ranks_by_popularity_with_scores() {
    let files = DataFiles::new();
    let args = ListArgs {
        data_dir: Some(files.root().to_path_buf()),
        sort: Some(String::from("popularity")),
        role: Some(String::from("premium")),
        ..ListArgs::default()
    };
    let output = capture(|out| run_list_with(args, out));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "  img-archive  Archive print  [1260.0]",
            "  img-aurora  Aurora over the fjord  [450.0]",
            "  img-vault  Vault door  [240.0]",
        ]
    );
}

#[rstest]
fn list_fails_without_a_catalogue() {
    let files = DataFiles::new();
    let args = ListArgs {
        data_dir: Some(files.root().to_path_buf()),
        catalogue: Some(files.root().join("absent.json")),
        ..ListArgs::default()
    };
    let mut out = Vec::new();
    let err = run_list_with(args, &mut out).expect_err("missing catalogue should error");
    assert!(matches!(err, CliError::MissingSourceFile { .. }));
}

#[rstest]
fn show_prints_every_detail() {
    let files = DataFiles::new();
    let args = ShowArgs {
        image_id: Some(String::from("img-aurora")),
        data_dir: Some(files.root().to_path_buf()),
        ..ShowArgs::default()
    };
    let output = capture(|out| run_show_with(args, out));
    assert!(output.contains("Id:          img-aurora"));
    assert!(output.contains("Title:       Aurora over the fjord"));
    assert!(output.contains("Description: Green arcs above the water line."));
    assert!(output.contains("Url:         https://images.example/aurora.jpg"));
    assert!(output.contains("Published:   2024-05-01 10:00 UTC"));
    assert!(output.contains("Views:       1500"));
    assert!(output.contains("Score:       375.0"));
    assert!(output.contains("Favorited:   no"));
}

#[rstest]
fn show_reflects_role_and_favorites() {
    let files = DataFiles::with_favorites(r#"["img-aurora"]"#);
    let args = ShowArgs {
        image_id: Some(String::from("img-aurora")),
        data_dir: Some(files.root().to_path_buf()),
        role: Some(String::from("premium")),
        ..ShowArgs::default()
    };
    let output = capture(|out| run_show_with(args, out));
    assert!(output.contains("Score:       450.0"));
    assert!(output.contains("Favorited:   yes"));
}

#[rstest]
fn show_falls_back_for_sparse_metadata() {
    let files = DataFiles::new();
    let args = ShowArgs {
        image_id: Some(String::from("img-vault")),
        data_dir: Some(files.root().to_path_buf()),
        ..ShowArgs::default()
    };
    let output = capture(|out| run_show_with(args, out));
    assert!(output.contains("Description: No description available."));
    assert!(output.contains("Url:         none"));
    assert!(output.contains("Kind:        restricted"));
}

#[rstest]
fn show_reports_unknown_images() {
    let files = DataFiles::new();
    let args = ShowArgs {
        image_id: Some(String::from("img-nowhere")),
        data_dir: Some(files.root().to_path_buf()),
        ..ShowArgs::default()
    };
    let mut out = Vec::new();
    let err = run_show_with(args, &mut out).expect_err("unknown image should error");
    assert!(matches!(err, CliError::Catalogue(_)));
}

#[rstest]
fn favoriting_an_eligible_image_updates_the_store() {
    let files = DataFiles::new();
    let args = FavoriteArgs {
        image_id: Some(String::from("img-aurora")),
        data_dir: Some(files.root().to_path_buf()),
        ..FavoriteArgs::default()
    };
    let output = capture(|out| run_favorite_with(args, out));
    assert_eq!(output, "img-aurora: added\n");
    assert!(files.read_favorites().contains("img-aurora"));
}

#[rstest]
fn denied_favorites_leave_the_store_untouched() {
    let files = DataFiles::new();
    let args = FavoriteArgs {
        image_id: Some(String::from("img-vault")),
        data_dir: Some(files.root().to_path_buf()),
        ..FavoriteArgs::default()
    };
    let output = capture(|out| run_favorite_with(args, out));
    assert_eq!(output, "img-vault: restricted images require premium role\n");
    assert_eq!(files.read_favorites(), "[]");
}

#[rstest]
fn favoriting_an_unknown_image_fails() {
    let files = DataFiles::new();
    let args = FavoriteArgs {
        image_id: Some(String::from("img-nowhere")),
        data_dir: Some(files.root().to_path_buf()),
        ..FavoriteArgs::default()
    };
    let mut out = Vec::new();
    let err = run_favorite_with(args, &mut out).expect_err("unknown image should error");
    assert!(matches!(err, CliError::Catalogue(_)));
    assert_eq!(files.read_favorites(), "[]");
}

#[rstest]
fn export_prints_a_default_plan() {
    let files = DataFiles::new();
    let args = ExportArgs {
        image_id: Some(String::from("img-aurora")),
        data_dir: Some(files.root().to_path_buf()),
        ..ExportArgs::default()
    };
    let output = capture(|out| run_export_with(args, out));
    assert!(output.contains("Export plan for img-aurora"));
    assert!(output.contains("  format:     jpeg (compressed, drops transparency)"));
    assert!(output.contains("  resolution: 1080p"));
    assert!(output.contains("  watermark:  none"));
    assert!(output.contains("  quality:    80%"));
    assert!(output.contains("  transforms: none"));
    assert!(output.contains("  result:     800x600, filters: none, quality: unchanged"));
}

#[rstest]
fn export_applies_transforms_to_the_plan() {
    let files = DataFiles::new();
    let args = ExportArgs {
        image_id: Some(String::from("img-aurora")),
        data_dir: Some(files.root().to_path_buf()),
        format: Some(String::from("png")),
        watermark: Some(String::from("lightbox demo")),
        filter: vec![String::from("sepia")],
        width: Some(640),
        height: Some(480),
        compress: Some(80),
        ..ExportArgs::default()
    };
    let output = capture(|out| run_export_with(args, out));
    assert!(output.contains("  format:     png (lossless, keeps transparency)"));
    assert!(output.contains("  watermark:  lightbox demo"));
    assert!(output.contains("    - apply sepia filter"));
    assert!(output.contains("    - resize to 640x480"));
    assert!(output.contains("    - compress at quality 80"));
    assert!(output.contains("  result:     640x480, filters: sepia, quality: 80%"));
}
