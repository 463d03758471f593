//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Stockroom");

    // Navigation
    m.insert(Key::NavProducts, "商品");
    m.insert(Key::NavUsers, "用户");
    m.insert(Key::SignOut, "退出登录");

    // Sign-in page
    m.insert(Key::SignInTitle, "登录");
    m.insert(Key::SignInButton, "登录");
    m.insert(Key::EmailLabel, "邮箱");
    m.insert(Key::PasswordLabel, "密码");
    m.insert(Key::Forbidden, "无权限");

    // Common
    m.insert(Key::ErrorTitle, "错误");
    m.insert(Key::Cancel, "取消");
    m.insert(Key::Loading, "加载中...");

    // Products page
    m.insert(Key::ProductsTitle, "商品");
    m.insert(Key::AddProduct, "新增商品");
    m.insert(Key::CreateProductTitle, "创建商品");
    m.insert(Key::UpdateProductTitle, "更新商品");
    m.insert(Key::CreateButton, "创建");
    m.insert(Key::UpdateButton, "更新");
    m.insert(Key::ProductName, "商品名称");
    m.insert(Key::ProductImage, "商品图片链接");
    m.insert(Key::ProductPrice, "价格");
    m.insert(Key::ProductVendorCode, "货号");
    m.insert(Key::ProductColor, "颜色");
    m.insert(Key::ProductSize, "尺码");
    m.insert(Key::ProductComposition, "成分");
    m.insert(Key::ProductQuantity, "数量");
    m.insert(Key::ProductBrand, "品牌");
    m.insert(Key::ProductDescription, "描述");
    m.insert(Key::ProductCategory, "分类");

    // Users page
    m.insert(Key::UsersTitle, "用户");
    m.insert(Key::AddUser, "新增用户");
    m.insert(Key::CreateUserTitle, "创建用户");
    m.insert(Key::UpdateUserTitle, "更新用户");
    m.insert(Key::UserEmail, "邮箱");
    m.insert(Key::UserPassword, "密码");
    m.insert(Key::UserRole, "角色");

    // Table
    m.insert(Key::RowsPerPage, "每页行数");
    m.insert(Key::PaginationOf, "共");
    m.insert(Key::TableEmpty, "暂无数据");
    m.insert(Key::ColImage, "图片");
    m.insert(Key::ColName, "名称");
    m.insert(Key::ColPrice, "价格");
    m.insert(Key::ColVendorCode, "货号");
    m.insert(Key::ColColor, "颜色");
    m.insert(Key::ColSize, "尺码");
    m.insert(Key::ColQuantity, "数量");
    m.insert(Key::ColBrand, "品牌");
    m.insert(Key::ColCategory, "分类");
    m.insert(Key::ColEmail, "邮箱");
    m.insert(Key::ColRole, "角色");

    // Confirm dialogs
    m.insert(Key::DeleteProductTitle, "删除商品");
    m.insert(Key::DeleteProductConfirm, "将从目录中删除该商品，是否继续？");
    m.insert(Key::DeleteButton, "删除");
    m.insert(Key::BlockUserTitle, "封禁用户");
    m.insert(Key::BlockUserConfirm, "将禁用该账号并从列表中移除，是否继续？");
    m.insert(Key::BlockButton, "封禁");

    // Toasts
    m.insert(Key::ProductCreated, "商品已创建");
    m.insert(Key::ProductUpdated, "商品已更新");
    m.insert(Key::ProductDeleted, "商品已删除");
    m.insert(Key::UserCreated, "用户已创建");
    m.insert(Key::UserUpdated, "用户已更新");
    m.insert(Key::UserBlocked, "用户已封禁");
    m.insert(Key::SignedOut, "已退出登录");

    m
});

pub(super) fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
