// All LLM prompt constants for the Outreach module.
// Scripts are WeChat friend-request messages, so prompts are written in Chinese.

use crate::outreach::models::Scenario;

/// Stands in for an optional field the user left empty.
pub const EMPTY_FIELD_PLACEHOLDER: &str = "无";

/// Persona, workflow and the hard 50-character rule. Versionless; sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "\
你是一名资深 B2B 销售专家，有十年以上为企业提供数字化转型解决方案的经验，\
熟悉销售心理学，能迅速判断客户的痛点与需求。

任务：根据用户给出的目标客户信息与沟通场景，写一条“添加微信好友”的申请话术，并给出你的分析思路。

# 工作流程
1. 分析客户：结合行业利好或常见痛点。
2. 找连接点：选出最有力的连接点与价值切入点。
3. 适配场景：按场景（陌生拜访、展会、转介绍、跟进、合作）调整语气与切入角度。
4. 生成话术：遵循四段式结构，【精准称呼】+【连接点/破冰】+【价值主张】+【消除压力/行动呼吁】。

# 硬性规则
1. 输出的 script 必须少于 50 个字（含标点）。
2. 超出字数时先删减自我介绍，再精简用词，必要时省略句末标点。
3. 语气专业、真诚、不卑不亢。";

/// Fixed display phrase for each scenario, embedded in the user prompt.
pub fn scenario_label(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::ColdCall => "首次陌生拜访 (Cold Reach)",
        Scenario::OfflineEvent => "展会/线下活动相遇 (Offline Event)",
        Scenario::Referral => "老客户/朋友转介绍 (Referral)",
        Scenario::FollowUp => "前期沟通后的跟进 (Follow-up)",
        Scenario::Partnership => "寻求商务合作 (Partnership)",
    }
}

/// Renders the user prompt. All values are inserted in one pass, so a field
/// containing template-like text is never re-expanded.
pub fn render_user_prompt(
    scenario_label: &str,
    company_name: &str,
    contact_name: &str,
    position: &str,
    additional_info: &str,
) -> String {
    format!(
        "请生成一条微信添加好友话术及分析报告。

【输入信息】
沟通场景：{scenario_label}
待联系公司：{company_name}
待联系人：{contact_name}
岗位：{position}
其他补充信息：{additional_info}

【要求】
1. 结果必须是 JSON 格式。
2. script 字段必须少于 50 字。
3. analysis 字段简要分析客户背景、连接点与价值主张。"
    )
}

// Response schema field descriptions.
pub const SCRIPT_DESCRIPTION: &str = "最终的微信添加好友话术，严格控制在50字以内（含标点）。";
pub const CUSTOMER_ANALYSIS_DESCRIPTION: &str = "基于输入信息的客户背景或痛点简析，20字左右。";
pub const CONNECTION_POINT_DESCRIPTION: &str = "选用的破冰连接点，例如同行背书、行业动态。";
pub const VALUE_PROP_DESCRIPTION: &str = "设计的价值钩子。";
