//! Immutable roadmap content catalog
//!
//! All presented text lives here: per-language string packs, per-version
//! roadmap entries, the unified stage-title table, and the feature matrix
//! data. The catalog is built once at startup and passed explicitly to the
//! renderer and the shell; nothing in this module performs I/O or logging.

use std::collections::HashMap;

use crate::error::{AgentmapError, Result};
use crate::matrix::FeatureMatrix;
use crate::types::{Audience, Language, Version};

/// All localized strings for one display language.
///
/// Invariant: every [`Audience`] key exists in `recommendations` and
/// `audience_labels`, and every [`Version`] key exists in `stage_labels`.
/// [`Catalog::new`] upholds this; hand-built packs in tests may not.
#[derive(Debug, Clone)]
pub struct LanguagePack {
    /// Vision statement shown under the document title
    pub vision: &'static str,
    /// Section heading for the feature list
    pub features_label: &'static str,
    /// Section heading for the scenario list
    pub scenarios_label: &'static str,
    /// Section heading for the audience recommendation
    pub recommendation_label: &'static str,
    /// Header of the feature column in the comparison matrix
    pub matrix_corner: &'static str,
    /// Row labels of the comparison matrix, in fixed display order
    pub matrix_rows: [&'static str; 5],
    /// Short display label per version (selector and matrix columns)
    pub stage_labels: HashMap<Version, &'static str>,
    /// Display label per audience (selector)
    pub audience_labels: HashMap<Audience, &'static str>,
    /// Tailored advice text per audience
    pub recommendations: HashMap<Audience, &'static str>,
}

impl LanguagePack {
    /// Look up the advice text for an audience.
    pub fn recommendation(&self, audience: Audience) -> Result<&'static str> {
        self.recommendations
            .get(&audience)
            .copied()
            .ok_or_else(|| AgentmapError::not_found(format!("recommendation for audience '{audience}'")))
    }

    /// Look up the display label for an audience.
    pub fn audience_label(&self, audience: Audience) -> Result<&'static str> {
        self.audience_labels
            .get(&audience)
            .copied()
            .ok_or_else(|| AgentmapError::not_found(format!("label for audience '{audience}'")))
    }

    /// Look up the short display label for a version.
    pub fn stage_label(&self, version: Version) -> Result<&'static str> {
        self.stage_labels
            .get(&version)
            .copied()
            .ok_or_else(|| AgentmapError::not_found(format!("label for version '{version}'")))
    }
}

/// Roadmap data for one product version.
///
/// Feature and scenario order is significant and preserved verbatim in the
/// rendered document.
#[derive(Debug, Clone)]
pub struct VersionEntry {
    /// Native stage title with release tag (e.g. `基础版 v1.0（2025 Q2）`)
    pub stage_title: &'static str,
    /// Core features, in display order
    pub features: &'static [&'static str],
    /// Typical scenarios, in display order
    pub scenarios: &'static [&'static str],
}

/// Process-wide content catalog.
///
/// Built once by [`Catalog::new`] and never mutated. Lookups return
/// [`AgentmapError::NotFound`] for absent keys; with the standard catalog
/// and enum-typed keys that cannot happen, but the contract is part of the
/// API surface.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) packs: HashMap<Language, LanguagePack>,
    pub(crate) entries: HashMap<Version, VersionEntry>,
    pub(crate) stage_titles: HashMap<(Version, Language), String>,
    pub(crate) matrix: FeatureMatrix,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the standard catalog.
    ///
    /// The stage-title table is populated for every (version, language)
    /// pair here, so the renderer never branches on a "native" language:
    /// the zh entry is the version's own stage title, the en entry is the
    /// localized stage label plus the fixed `Release` suffix.
    pub fn new() -> Self {
        let packs: HashMap<Language, LanguagePack> =
            HashMap::from([(Language::Zh, zh_pack()), (Language::En, en_pack())]);
        let entries = version_entries();

        let mut stage_titles = HashMap::new();
        for (&version, entry) in &entries {
            stage_titles.insert((version, Language::Zh), entry.stage_title.to_string());
            let en_label = packs[&Language::En].stage_labels[&version];
            stage_titles.insert((version, Language::En), format!("{en_label} Release"));
        }

        Self {
            packs,
            entries,
            stage_titles,
            matrix: FeatureMatrix::standard(),
        }
    }

    /// Look up the language pack for a display language.
    pub fn pack(&self, language: Language) -> Result<&LanguagePack> {
        self.packs
            .get(&language)
            .ok_or_else(|| AgentmapError::not_found(format!("language '{language}'")))
    }

    /// Look up the roadmap entry for a version.
    pub fn entry(&self, version: Version) -> Result<&VersionEntry> {
        self.entries
            .get(&version)
            .ok_or_else(|| AgentmapError::not_found(format!("version '{version}'")))
    }

    /// Look up the display stage title for a (version, language) pair.
    pub fn stage_title(&self, version: Version, language: Language) -> Result<&str> {
        self.stage_titles
            .get(&(version, language))
            .map(String::as_str)
            .ok_or_else(|| {
                AgentmapError::not_found(format!("stage title for '{version}' in '{language}'"))
            })
    }

    /// The fixed feature-comparison matrix data.
    pub fn matrix(&self) -> &FeatureMatrix {
        &self.matrix
    }
}

fn zh_pack() -> LanguagePack {
    LanguagePack {
        vision: "🎯 愿景：\n构建一个轻量、模块化、可成长的智能Agent框架，支持任务规划、工具调度、记忆回调与多Agent协同。",
        features_label: "✅ 核心功能",
        scenarios_label: "🧠 典型场景",
        recommendation_label: "🎯 角色建议",
        matrix_corner: "功能模块",
        matrix_rows: [
            "单轮任务执行",
            "上下文记忆",
            "工具调度链",
            "多Agent协作",
            "自主行为规划",
        ],
        stage_labels: HashMap::from([
            (Version::Basic, "基础版"),
            (Version::Advanced, "高级版"),
            (Version::Pro, "进阶版"),
        ]),
        audience_labels: HashMap::from([
            (Audience::Developer, "开发者"),
            (Audience::Business, "企业客户"),
            (Audience::Leader, "项目负责人/领导"),
        ]),
        recommendations: HashMap::from([
            (Audience::Developer, "专注功能与插件扩展，适合快速集成测试。"),
            (Audience::Business, "强调场景与ROI价值，支持多角色任务分工与部署。"),
            (Audience::Leader, "突出项目节奏与阶段交付，确保资源匹配与风险控制。"),
        ]),
    }
}

fn en_pack() -> LanguagePack {
    LanguagePack {
        vision: "🎯 Vision:\nBuild a lightweight, modular, and extensible Agent framework with task planning, tool routing, memory callback, and multi-agent collaboration.",
        features_label: "✅ Core Features",
        scenarios_label: "🧠 Typical Scenarios",
        recommendation_label: "🎯 Role Recommendation",
        matrix_corner: "Feature",
        matrix_rows: [
            "Single-turn execution",
            "Contextual memory",
            "Tool chaining",
            "Multi-agent collaboration",
            "Autonomous planning",
        ],
        stage_labels: HashMap::from([
            (Version::Basic, "Basic"),
            (Version::Advanced, "Advanced"),
            (Version::Pro, "Pro"),
        ]),
        audience_labels: HashMap::from([
            (Audience::Developer, "Developer"),
            (Audience::Business, "Business User"),
            (Audience::Leader, "Project Leader"),
        ]),
        recommendations: HashMap::from([
            (Audience::Developer, "Focus on modularity and quick integration."),
            (Audience::Business, "Emphasize value, ROI, and workflow automation."),
            (Audience::Leader, "Highlight delivery milestones and team efficiency."),
        ]),
    }
}

fn version_entries() -> HashMap<Version, VersionEntry> {
    HashMap::from([
        (
            Version::Basic,
            VersionEntry {
                stage_title: "基础版 v1.0（2025 Q2）",
                features: &["单轮任务", "基础工具", "Prompt模板", "CLI支持"],
                scenarios: &["搜索问答", "计算器助手"],
            },
        ),
        (
            Version::Advanced,
            VersionEntry {
                stage_title: "高级版 v2.0（2025 Q3）",
                features: &["上下文记忆", "ToolChain", "日志分析", "向量召回"],
                scenarios: &["日报生成", "网页摘要"],
            },
        ),
        (
            Version::Pro,
            VersionEntry {
                stage_title: "进阶版 v3.0（2025 Q4）",
                features: &["多Agent协作", "链式执行", "知识图谱", "环境交互"],
                scenarios: &["复杂流程", "协作任务", "角色驱动写作"],
            },
        ),
    ])
}
